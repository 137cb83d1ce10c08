use azmoon_core::models::{AnalysisTemplate, TestCutoff};

use super::{TemplateSet, cutoff, template};

/// ENRICH marital satisfaction scale. 35 items, total 35–175, scored against
/// the aggregate `total` scale the corrective patch guarantees.
pub struct Enrich;

impl TemplateSet for Enrich {
    fn slug(&self) -> &str {
        "enrich"
    }

    fn cutoffs(&self) -> Vec<TestCutoff> {
        vec![
            cutoff("total", 35.0, 70.0, "VeryLow", "رضایت زناشویی بسیار پایین"),
            cutoff("total", 71.0, 105.0, "Low", "رضایت زناشویی پایین"),
            cutoff("total", 106.0, 140.0, "Moderate", "رضایت زناشویی متوسط"),
            cutoff("total", 141.0, 175.0, "High", "رضایت زناشویی بالا"),
        ]
    }

    fn analysis_templates(&self) -> Vec<AnalysisTemplate> {
        vec![
            template(
                "total",
                "VeryLow",
                "رضایت زناشویی بسیار پایین",
                "نمره شما نشان‌دهنده نارضایتی جدی از رابطه زناشویی است.",
                "احتمالاً در زمینه‌های ارتباط، حل تعارض، یا رضایت کلی چالش‌های جدی دارید.",
                "• مشاوره زوج‌درمانی فوری توصیه می‌شود\n• صحبت صادقانه با همسر\n• شناسایی مشکلات اصلی",
                "مراجعه به مشاور خانواده اکیداً توصیه می‌شود.",
            ),
            template(
                "total",
                "Low",
                "رضایت زناشویی پایین",
                "نمره شما نشان‌دهنده رضایت پایین از رابطه زناشویی است.",
                "برخی زمینه‌های رابطه نیاز به توجه و بهبود دارند.",
                "• مشاوره زوجی می‌تواند مفید باشد\n• بهبود مهارت‌های ارتباطی\n• افزایش زمان کیفی با همسر",
                "مشاوره با متخصص توصیه می‌شود.",
            ),
            template(
                "total",
                "Moderate",
                "رضایت زناشویی متوسط",
                "نمره شما نشان‌دهنده رضایت متوسط از رابطه زناشویی است.",
                "رابطه شما در برخی زمینه‌ها خوب و در برخی دیگر جای بهبود دارد.",
                "• تقویت نقاط قوت رابطه\n• کار روی زمینه‌های نیازمند بهبود\n• ارتباط منظم و صادقانه",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "total",
                "High",
                "رضایت زناشویی بالا",
                "نمره شما نشان‌دهنده رضایت خوب از رابطه زناشویی است.",
                "شما و همسرتان رابطه سالم و رضایت‌بخشی دارید.",
                "• حفظ ارتباط مثبت\n• قدردانی از همسر\n• ادامه رشد مشترک",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
        ]
    }
}
