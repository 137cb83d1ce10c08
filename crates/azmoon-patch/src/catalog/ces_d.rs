use azmoon_core::models::{AnalysisTemplate, TestCutoff};

use super::{TemplateSet, cutoff, template};

/// CES-D: Center for Epidemiologic Studies Depression Scale. 20 items,
/// total 0–60, past-week symptom frame.
pub struct CesD;

impl TemplateSet for CesD {
    fn slug(&self) -> &str {
        "ces-d"
    }

    fn cutoffs(&self) -> Vec<TestCutoff> {
        vec![
            cutoff("total", 0.0, 15.0, "Normal", "بدون افسردگی"),
            cutoff("total", 16.0, 20.0, "Mild", "افسردگی خفیف"),
            cutoff("total", 21.0, 30.0, "Moderate", "افسردگی متوسط"),
            cutoff("total", 31.0, 60.0, "Severe", "افسردگی شدید"),
        ]
    }

    fn analysis_templates(&self) -> Vec<AnalysisTemplate> {
        vec![
            template(
                "total",
                "Normal",
                "بدون علائم افسردگی قابل توجه",
                "نمره شما (۰-۱۵) نشان‌دهنده عدم وجود علائم افسردگی بالینی است.",
                "شما در هفته گذشته علائم افسردگی قابل توجهی تجربه نکرده‌اید.",
                "• ادامه فعالیت‌های اجتماعی و لذت‌بخش\n• حفظ روابط سالم",
                "این نتیجه صرفاً جهت آگاهی است.",
            ),
            template(
                "total",
                "Mild",
                "علائم افسردگی خفیف",
                "نمره شما (۱۶-۲۰) نشان‌دهنده برخی علائم افسردگی است که نیاز به توجه دارد.",
                "ممکن است گاهی احساس غمگینی، خستگی یا کاهش علاقه داشته باشید.",
                "• توجه به خودمراقبتی\n• افزایش فعالیت‌های اجتماعی\n• در صورت تداوم، مشاوره با متخصص",
                "در صورت تداوم علائم، مراجعه به متخصص توصیه می‌شود.",
            ),
            template(
                "total",
                "Moderate",
                "افسردگی متوسط",
                "نمره شما (۲۱-۳۰) نشان‌دهنده افسردگی در سطح متوسط است.",
                "علائم افسردگی مانند غمگینی مداوم، کاهش انرژی، و مشکلات خواب ممکن است بر زندگی روزمره تأثیر بگذارند.",
                "• مشاوره با روان‌شناس یا روان‌پزشک توصیه می‌شود\n• شرکت در فعالیت‌های گروهی\n• ورزش منظم",
                "مراجعه به متخصص بهداشت روان توصیه می‌شود.",
            ),
            template(
                "total",
                "Severe",
                "افسردگی شدید",
                "نمره شما (۳۱-۶۰) نشان‌دهنده افسردگی شدید است که نیاز به مداخله تخصصی دارد.",
                "علائم شدید افسردگی می‌تواند بر تمام جنبه‌های زندگی تأثیر بگذارد و نیاز به کمک حرفه‌ای دارد.",
                "• مراجعه فوری به روان‌پزشک\n• در صورت داشتن افکار آزاردهنده، با خط اورژانس ۱۲۳ تماس بگیرید",
                "این وضعیت نیاز به مراجعه فوری به متخصص دارد.",
            ),
        ]
    }
}
