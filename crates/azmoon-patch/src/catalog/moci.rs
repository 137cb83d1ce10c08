use azmoon_core::models::{AnalysisTemplate, TestCutoff};

use super::{TemplateSet, cutoff, template};

/// MOCI: Maudsley Obsessional Compulsive Inventory. 30 items, total 0–30.
pub struct Moci;

impl TemplateSet for Moci {
    fn slug(&self) -> &str {
        "moci"
    }

    fn cutoffs(&self) -> Vec<TestCutoff> {
        vec![
            cutoff("total", 0.0, 10.0, "Normal", "طبیعی"),
            cutoff("total", 11.0, 15.0, "Mild", "خفیف"),
            cutoff("total", 16.0, 20.0, "Moderate", "متوسط"),
            cutoff("total", 21.0, 30.0, "Severe", "شدید"),
        ]
    }

    fn analysis_templates(&self) -> Vec<AnalysisTemplate> {
        vec![
            template(
                "total",
                "Normal",
                "بدون علائم وسواس قابل توجه",
                "نمره شما (۰-۱۰) در محدوده طبیعی است.",
                "شما علائم وسواس فکری-عملی قابل توجهی نشان نمی‌دهید.",
                "• ادامه سبک زندگی سالم",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "total",
                "Mild",
                "علائم وسواس خفیف",
                "نمره شما (۱۱-۱۵) نشان‌دهنده برخی علائم وسواسی خفیف است.",
                "ممکن است گاهی افکار تکراری یا رفتارهای وسواسی خفیف داشته باشید.",
                "• توجه به الگوهای فکری\n• در صورت تداوم، مشاوره با متخصص",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "total",
                "Moderate",
                "علائم وسواس متوسط",
                "نمره شما (۱۶-۲۰) نشان‌دهنده علائم وسواسی در سطح متوسط است.",
                "افکار مزاحم یا رفتارهای تکراری ممکن است وقت قابل توجهی از شما بگیرند.",
                "• مشاوره با روان‌شناس توصیه می‌شود\n• درمان شناختی-رفتاری (CBT) و ERP مؤثر هستند",
                "مراجعه به متخصص توصیه می‌شود.",
            ),
            template(
                "total",
                "Severe",
                "علائم وسواس شدید",
                "نمره شما (۲۱-۳۰) نشان‌دهنده علائم وسواسی شدید است.",
                "وسواس‌ها و اجبارها احتمالاً بر زندگی روزمره تأثیر جدی گذاشته‌اند.",
                "• مراجعه به روان‌پزشک یا روان‌شناس متخصص OCD\n• ترکیب دارودرمانی و روان‌درمانی",
                "این وضعیت نیاز به درمان تخصصی دارد.",
            ),
        ]
    }
}
