use azmoon_core::models::{AnalysisTemplate, TestCutoff};

use super::{TemplateSet, cutoff, template};

/// BAI: Beck Anxiety Inventory. 21 items, total 0–63.
pub struct Bai;

impl TemplateSet for Bai {
    fn slug(&self) -> &str {
        "bai"
    }

    fn cutoffs(&self) -> Vec<TestCutoff> {
        vec![
            cutoff("total", 0.0, 7.0, "Minimal", "اضطراب حداقلی"),
            cutoff("total", 8.0, 15.0, "Mild", "اضطراب خفیف"),
            cutoff("total", 16.0, 25.0, "Moderate", "اضطراب متوسط"),
            cutoff("total", 26.0, 63.0, "Severe", "اضطراب شدید"),
        ]
    }

    fn analysis_templates(&self) -> Vec<AnalysisTemplate> {
        vec![
            template(
                "total",
                "Minimal",
                "اضطراب حداقلی",
                "نمره شما (۰-۷) در محدوده طبیعی قرار دارد و نشان‌دهنده عدم وجود اضطراب بالینی قابل توجه است.",
                "احتمالاً گاهی احساس نگرانی طبیعی تجربه می‌کنید که بخشی عادی از زندگی است.",
                "• حفظ سبک زندگی سالم\n• تمرین تنفس عمیق در مواقع استرس\n• ورزش منظم",
                "این نتیجه صرفاً جهت آگاهی است و جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "total",
                "Mild",
                "اضطراب خفیف",
                "نمره شما (۸-۱۵) نشان‌دهنده اضطراب خفیف است که معمولاً با تکنیک‌های خودیاری قابل مدیریت است.",
                "علائمی مانند نگرانی گاه‌به‌گاه، تنش عضلانی خفیف، یا بی‌قراری تجربه می‌کنید.",
                "• تمرین تکنیک‌های آرام‌سازی\n• ورزش منظم\n• کاهش کافئین\n• خواب کافی",
                "این نتیجه صرفاً جهت آگاهی است و جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "total",
                "Moderate",
                "اضطراب متوسط",
                "نمره شما (۱۶-۲۵) نشان‌دهنده اضطراب متوسط است که می‌تواند بر زندگی روزمره تأثیر بگذارد.",
                "علائمی مانند نگرانی مداوم، تپش قلب، تعریق، مشکلات خواب و تنش را تجربه می‌کنید.",
                "• مشاوره با روان‌شناس توصیه می‌شود\n• روان‌درمانی (CBT) مؤثر است\n• تمرینات مدیتیشن و ذهن‌آگاهی",
                "مراجعه به متخصص بهداشت روان توصیه می‌شود.",
            ),
            template(
                "total",
                "Severe",
                "اضطراب شدید",
                "نمره شما (۲۶-۶۳) نشان‌دهنده اضطراب شدید است که نیاز به مداخله تخصصی دارد.",
                "علائم شدید اضطراب می‌تواند شامل حملات پانیک، ترس شدید، اجتناب از موقعیت‌ها، و علائم جسمی ناتوان‌کننده باشد.",
                "• مراجعه فوری به روان‌پزشک\n• ترکیب دارودرمانی و روان‌درمانی\n• اجتناب از کافئین و الکل",
                "این وضعیت نیاز به مراجعه فوری به متخصص دارد.",
            ),
        ]
    }
}
