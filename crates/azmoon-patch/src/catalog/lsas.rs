use azmoon_core::models::{AnalysisTemplate, TestCutoff};

use super::{TemplateSet, cutoff, template};

/// LSAS: Liebowitz Social Anxiety Scale. 24 situations rated for fear and
/// avoidance, total 0–144.
pub struct Lsas;

impl TemplateSet for Lsas {
    fn slug(&self) -> &str {
        "lsas"
    }

    fn cutoffs(&self) -> Vec<TestCutoff> {
        vec![
            cutoff("total", 0.0, 29.0, "NoSocial", "بدون اضطراب اجتماعی"),
            cutoff("total", 30.0, 49.0, "Mild", "اضطراب اجتماعی خفیف"),
            cutoff("total", 50.0, 64.0, "Moderate", "اضطراب اجتماعی متوسط"),
            cutoff("total", 65.0, 79.0, "MarkedSocial", "اضطراب اجتماعی قابل توجه"),
            cutoff("total", 80.0, 144.0, "Severe", "اضطراب اجتماعی شدید"),
        ]
    }

    fn analysis_templates(&self) -> Vec<AnalysisTemplate> {
        vec![
            template(
                "total",
                "NoSocial",
                "بدون اضطراب اجتماعی قابل توجه",
                "نمره شما (۰-۲۹) نشان‌دهنده عدم وجود اضطراب اجتماعی قابل توجه است.",
                "شما در موقعیت‌های اجتماعی راحت هستید.",
                "• ادامه تعاملات اجتماعی مثبت",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "total",
                "Mild",
                "اضطراب اجتماعی خفیف",
                "نمره شما (۳۰-۴۹) نشان‌دهنده اضطراب اجتماعی خفیف است.",
                "در برخی موقعیت‌های اجتماعی ممکن است احساس ناراحتی کنید.",
                "• تمرین تدریجی در موقعیت‌های اجتماعی\n• تکنیک‌های آرام‌سازی",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "total",
                "Moderate",
                "اضطراب اجتماعی متوسط",
                "نمره شما (۵۰-۶۴) نشان‌دهنده اضطراب اجتماعی متوسط است.",
                "اضطراب در موقعیت‌های اجتماعی ممکن است بر روابط و عملکرد تأثیر بگذارد.",
                "• مشاوره با روان‌شناس توصیه می‌شود\n• گروه‌درمانی می‌تواند مفید باشد",
                "مراجعه به متخصص توصیه می‌شود.",
            ),
            template(
                "total",
                "MarkedSocial",
                "اضطراب اجتماعی قابل توجه",
                "نمره شما (۶۵-۷۹) نشان‌دهنده اضطراب اجتماعی قابل توجه است.",
                "ممکن است از بسیاری موقعیت‌های اجتماعی اجتناب کنید.",
                "• مراجعه به روان‌شناس یا روان‌پزشک\n• درمان شناختی-رفتاری (CBT) مؤثر است",
                "این وضعیت نیاز به درمان تخصصی دارد.",
            ),
            template(
                "total",
                "Severe",
                "اضطراب اجتماعی شدید",
                "نمره شما (۸۰+) نشان‌دهنده اضطراب اجتماعی شدید است.",
                "اضطراب اجتماعی به طور جدی بر زندگی روزمره تأثیر گذاشته است.",
                "• مراجعه فوری به روان‌پزشک\n• ترکیب دارودرمانی و روان‌درمانی",
                "این وضعیت نیاز به درمان تخصصی فوری دارد.",
            ),
        ]
    }
}
