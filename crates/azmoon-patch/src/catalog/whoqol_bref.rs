use azmoon_core::models::{AnalysisTemplate, TestCutoff};

use super::{TemplateSet, cutoff, template};

/// WHOQOL-BREF: WHO Quality of Life, brief version. 26 items across four
/// domains plus the aggregate `total` the corrective patch guarantees.
pub struct WhoqolBref;

impl TemplateSet for WhoqolBref {
    fn slug(&self) -> &str {
        "whoqol-bref"
    }

    fn cutoffs(&self) -> Vec<TestCutoff> {
        vec![
            cutoff("total", 0.0, 40.0, "Poor", "کیفیت زندگی ضعیف"),
            cutoff("total", 41.0, 60.0, "Moderate", "کیفیت زندگی متوسط"),
            cutoff("total", 61.0, 80.0, "Good", "کیفیت زندگی خوب"),
            cutoff("total", 81.0, 130.0, "VeryGood", "کیفیت زندگی بسیار خوب"),
        ]
    }

    fn analysis_templates(&self) -> Vec<AnalysisTemplate> {
        vec![
            template(
                "total",
                "Poor",
                "کیفیت زندگی ضعیف",
                "نمره شما نشان‌دهنده کیفیت زندگی نامطلوب در چندین حوزه است.",
                "ممکن است در زمینه سلامت جسمی، روانی، روابط اجتماعی یا محیط زندگی چالش‌هایی داشته باشید.",
                "• شناسایی حوزه‌های نیازمند بهبود\n• مشاوره با متخصصین مرتبط\n• تقویت شبکه حمایت اجتماعی",
                "مراجعه به متخصص برای بهبود کیفیت زندگی توصیه می‌شود.",
            ),
            template(
                "total",
                "Moderate",
                "کیفیت زندگی متوسط",
                "نمره شما نشان‌دهنده کیفیت زندگی در حد متوسط است.",
                "در برخی حوزه‌ها وضعیت خوب و در برخی دیگر جای بهبود دارید.",
                "• تمرکز بر حوزه‌های نیازمند بهبود\n• حفظ نقاط قوت فعلی",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "total",
                "Good",
                "کیفیت زندگی خوب",
                "نمره شما نشان‌دهنده کیفیت زندگی خوب است.",
                "شما در بیشتر حوزه‌های زندگی رضایت دارید.",
                "• حفظ سبک زندگی فعلی\n• توسعه بیشتر نقاط قوت",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "total",
                "VeryGood",
                "کیفیت زندگی بسیار خوب",
                "نمره شما نشان‌دهنده کیفیت زندگی عالی است.",
                "شما در همه حوزه‌های مهم زندگی رضایت بالایی دارید.",
                "• ادامه مسیر فعلی\n• کمک به دیگران در بهبود کیفیت زندگی",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
        ]
    }
}
