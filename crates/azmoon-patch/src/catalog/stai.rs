use azmoon_core::models::{AnalysisTemplate, TestCutoff};

use super::{TemplateSet, cutoff, template};

/// STAI: State-Trait Anxiety Inventory. Two 20-item scales, each 20–80.
pub struct Stai;

impl TemplateSet for Stai {
    fn slug(&self) -> &str {
        "stai"
    }

    fn cutoffs(&self) -> Vec<TestCutoff> {
        vec![
            cutoff("state", 20.0, 37.0, "Low", "اضطراب موقعیتی پایین"),
            cutoff("state", 38.0, 44.0, "Moderate", "اضطراب موقعیتی متوسط"),
            cutoff("state", 45.0, 80.0, "High", "اضطراب موقعیتی بالا"),
            cutoff("trait", 20.0, 37.0, "Low", "اضطراب صفت پایین"),
            cutoff("trait", 38.0, 44.0, "Moderate", "اضطراب صفت متوسط"),
            cutoff("trait", 45.0, 80.0, "High", "اضطراب صفت بالا"),
        ]
    }

    fn analysis_templates(&self) -> Vec<AnalysisTemplate> {
        vec![
            template(
                "state",
                "Low",
                "اضطراب موقعیتی پایین",
                "نمره اضطراب موقعیتی شما (۲۰-۳۷) نشان‌دهنده آرامش نسبی در این لحظه است.",
                "شما در حال حاضر سطح پایینی از استرس و نگرانی را تجربه می‌کنید.",
                "• حفظ این وضعیت مثبت\n• ادامه فعالیت‌های آرام‌بخش",
                "این نتیجه صرفاً جهت آگاهی است.",
            ),
            template(
                "state",
                "Moderate",
                "اضطراب موقعیتی متوسط",
                "نمره اضطراب موقعیتی شما (۳۸-۴۴) نشان‌دهنده سطح متوسطی از استرس فعلی است.",
                "احتمالاً در حال تجربه یک موقعیت استرس‌زا هستید.",
                "• تنفس عمیق و آرام‌سازی\n• شناسایی منبع استرس",
                "این نتیجه صرفاً جهت آگاهی است.",
            ),
            template(
                "state",
                "High",
                "اضطراب موقعیتی بالا",
                "نمره اضطراب موقعیتی شما (۴۵-۸۰) نشان‌دهنده استرس شدید فعلی است.",
                "شما در حال تجربه سطح بالایی از اضطراب هستید که نیاز به توجه دارد.",
                "• استفاده از تکنیک‌های آرام‌سازی فوری\n• در صورت تداوم، مشاوره با متخصص",
                "اگر این حالت ادامه دارد، با متخصص مشورت کنید.",
            ),
            template(
                "trait",
                "Low",
                "اضطراب صفت پایین",
                "نمره اضطراب صفت شما (۲۰-۳۷) نشان‌دهنده این است که معمولاً فرد آرامی هستید.",
                "شما به طور کلی تمایل کمتری به تجربه اضطراب دارید.",
                "• ادامه سبک زندگی سالم",
                "این نتیجه صرفاً جهت آگاهی است.",
            ),
            template(
                "trait",
                "Moderate",
                "اضطراب صفت متوسط",
                "نمره اضطراب صفت شما (۳۸-۴۴) در محدوده متوسط قرار دارد.",
                "شما گاهی اوقات تمایل به نگرانی و اضطراب دارید.",
                "• یادگیری تکنیک‌های مدیریت استرس\n• ورزش منظم",
                "این نتیجه صرفاً جهت آگاهی است.",
            ),
            template(
                "trait",
                "High",
                "اضطراب صفت بالا",
                "نمره اضطراب صفت شما (۴۵-۸۰) نشان‌دهنده تمایل بالا به اضطراب است.",
                "شما معمولاً در موقعیت‌های مختلف اضطراب بیشتری تجربه می‌کنید.",
                "• مشاوره با روان‌شناس توصیه می‌شود\n• روان‌درمانی می‌تواند مفید باشد",
                "مراجعه به متخصص توصیه می‌شود.",
            ),
        ]
    }
}
