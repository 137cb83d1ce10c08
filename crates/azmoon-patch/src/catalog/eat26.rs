use azmoon_core::models::{AnalysisTemplate, TestCutoff};

use super::{TemplateSet, cutoff, template};

/// EAT-26: Eating Attitudes Test. 26 items, screening threshold at 20.
pub struct Eat26;

impl TemplateSet for Eat26 {
    fn slug(&self) -> &str {
        "eat-26"
    }

    fn cutoffs(&self) -> Vec<TestCutoff> {
        vec![
            cutoff("total", 0.0, 19.0, "Normal", "طبیعی"),
            cutoff("total", 20.0, 78.0, "AtRisk", "در معرض خطر اختلال خوردن"),
        ]
    }

    fn analysis_templates(&self) -> Vec<AnalysisTemplate> {
        vec![
            template(
                "total",
                "Normal",
                "رفتارهای خوردن طبیعی",
                "نمره شما (کمتر از ۲۰) نشان‌دهنده رفتارهای خوردن طبیعی است.",
                "شما نگرش و رفتارهای سالمی نسبت به غذا و وزن دارید.",
                "• حفظ تغذیه متعادل\n• ورزش منظم برای سلامتی",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "total",
                "AtRisk",
                "در معرض خطر اختلال خوردن",
                "نمره شما (۲۰ یا بیشتر) نشان‌دهنده نگرش‌ها و رفتارهای نگران‌کننده نسبت به غذا و وزن است.",
                "این نمره نشان می‌دهد که ممکن است در معرض خطر اختلال خوردن باشید یا نشانه‌هایی از آن داشته باشید.",
                "• مراجعه به متخصص تغذیه و روان‌شناس\n• ارزیابی کامل توسط پزشک\n• از رژیم‌های شدید خودداری کنید",
                "این نتیجه به معنای تشخیص قطعی نیست اما نیاز به ارزیابی تخصصی دارد.",
            ),
        ]
    }
}
