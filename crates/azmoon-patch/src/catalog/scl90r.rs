use azmoon_core::models::{AnalysisTemplate, TestCutoff};

use super::{TemplateSet, cutoff, template};

/// SCL-90-R: Symptom Checklist-90, Revised. Banded on the Global Severity
/// Index, a 0–4 item mean, so the bounds are fractional.
pub struct Scl90R;

impl TemplateSet for Scl90R {
    fn slug(&self) -> &str {
        "scl-90-r"
    }

    fn cutoffs(&self) -> Vec<TestCutoff> {
        vec![
            cutoff("gsi", 0.0, 0.99, "Normal", "طبیعی"),
            cutoff("gsi", 1.0, 1.49, "Mild", "خفیف"),
            cutoff("gsi", 1.5, 1.99, "Moderate", "متوسط"),
            cutoff("gsi", 2.0, 4.0, "Severe", "شدید"),
        ]
    }

    fn analysis_templates(&self) -> Vec<AnalysisTemplate> {
        vec![
            template(
                "gsi",
                "Normal",
                "وضعیت روان‌شناختی طبیعی",
                "شاخص شدت کلی (GSI) شما در محدوده طبیعی است.",
                "شما علائم روان‌شناختی قابل توجهی نشان نمی‌دهید.",
                "• حفظ سبک زندگی سالم\n• مدیریت استرس‌های روزمره",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "gsi",
                "Mild",
                "علائم روان‌شناختی خفیف",
                "شاخص شدت کلی (GSI) شما نشان‌دهنده برخی علائم خفیف است.",
                "ممکن است در برخی حوزه‌ها مانند اضطراب یا افسردگی علائم خفیفی داشته باشید.",
                "• توجه به خودمراقبتی\n• در صورت تداوم، مشاوره با متخصص",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "gsi",
                "Moderate",
                "علائم روان‌شناختی متوسط",
                "شاخص شدت کلی (GSI) شما نشان‌دهنده علائم در سطح متوسط است.",
                "علائم روان‌شناختی ممکن است بر عملکرد روزانه تأثیر بگذارند.",
                "• مشاوره با روان‌شناس یا روان‌پزشک توصیه می‌شود\n• ارزیابی کامل‌تر زیرمقیاس‌ها",
                "مراجعه به متخصص بهداشت روان توصیه می‌شود.",
            ),
            template(
                "gsi",
                "Severe",
                "علائم روان‌شناختی شدید",
                "شاخص شدت کلی (GSI) شما نشان‌دهنده علائم شدید روان‌شناختی است.",
                "این نمره نشان‌دهنده آشفتگی روان‌شناختی قابل توجه است که نیاز به مداخله تخصصی دارد.",
                "• مراجعه فوری به روان‌پزشک\n• ارزیابی کامل تشخیصی",
                "این وضعیت نیاز به مراجعه فوری به متخصص دارد.",
            ),
        ]
    }
}
