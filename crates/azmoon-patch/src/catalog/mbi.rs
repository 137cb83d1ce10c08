use azmoon_core::models::{AnalysisTemplate, TestCutoff};

use super::{TemplateSet, cutoff, template};

/// MBI: Maslach Burnout Inventory. Three scales scored separately; note that
/// low personal accomplishment indicates high burnout.
///
/// Analysis templates cover the low/high ends only; the moderate bands are
/// flagged by `azmoon check` until content is written for them.
pub struct Mbi;

impl TemplateSet for Mbi {
    fn slug(&self) -> &str {
        "mbi"
    }

    fn cutoffs(&self) -> Vec<TestCutoff> {
        vec![
            cutoff("emotional_exhaustion", 0.0, 16.0, "Low", "خستگی هیجانی پایین"),
            cutoff("emotional_exhaustion", 17.0, 26.0, "Moderate", "خستگی هیجانی متوسط"),
            cutoff("emotional_exhaustion", 27.0, 54.0, "High", "خستگی هیجانی بالا"),
            cutoff("depersonalization", 0.0, 6.0, "Low", "مسخ شخصیت پایین"),
            cutoff("depersonalization", 7.0, 12.0, "Moderate", "مسخ شخصیت متوسط"),
            cutoff("depersonalization", 13.0, 30.0, "High", "مسخ شخصیت بالا"),
            cutoff(
                "personal_accomplishment",
                0.0,
                31.0,
                "Low",
                "موفقیت فردی پایین (فرسودگی بالا)",
            ),
            cutoff("personal_accomplishment", 32.0, 38.0, "Moderate", "موفقیت فردی متوسط"),
            cutoff(
                "personal_accomplishment",
                39.0,
                48.0,
                "High",
                "موفقیت فردی بالا (فرسودگی پایین)",
            ),
        ]
    }

    fn analysis_templates(&self) -> Vec<AnalysisTemplate> {
        vec![
            template(
                "emotional_exhaustion",
                "Low",
                "خستگی هیجانی پایین",
                "نمره خستگی هیجانی شما در سطح پایین است.",
                "شما انرژی هیجانی خوبی برای کارتان دارید.",
                "• حفظ تعادل کار و زندگی",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "emotional_exhaustion",
                "High",
                "خستگی هیجانی بالا",
                "نمره خستگی هیجانی شما نشان‌دهنده خستگی شدید شغلی است.",
                "احساس تخلیه و خستگی از کار می‌کنید که نشانه فرسودگی است.",
                "• استراحت کافی\n• مشاوره با متخصص بهداشت شغلی\n• بازنگری در حجم کار",
                "توجه جدی به بازسازی انرژی ضروری است.",
            ),
            template(
                "depersonalization",
                "Low",
                "مسخ شخصیت پایین",
                "نمره مسخ شخصیت شما پایین است.",
                "شما هنوز ارتباط خوبی با ارباب‌رجوع/همکاران دارید.",
                "• حفظ روابط مثبت کاری",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "depersonalization",
                "High",
                "مسخ شخصیت بالا",
                "نمره مسخ شخصیت شما نشان‌دهنده فاصله‌گرفتن هیجانی از کار است.",
                "ممکن است احساس بی‌تفاوتی یا منفی نسبت به دیگران داشته باشید.",
                "• بازنگری در نگرش کاری\n• مشاوره با روان‌شناس صنعتی-سازمانی",
                "این وضعیت نیاز به توجه دارد.",
            ),
            template(
                "personal_accomplishment",
                "High",
                "موفقیت فردی بالا",
                "نمره موفقیت فردی شما نشان‌دهنده رضایت شغلی خوب است.",
                "شما احساس می‌کنید کارتان ارزشمند و مؤثر است.",
                "• ادامه رویکرد مثبت فعلی",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "personal_accomplishment",
                "Low",
                "موفقیت فردی پایین (فرسودگی بالا)",
                "نمره موفقیت فردی پایین شما نشان‌دهنده کاهش رضایت شغلی است.",
                "احساس می‌کنید کارتان بی‌ارزش است یا تأثیری ندارد.",
                "• شناسایی دستاوردهای کاری\n• مشاوره شغلی\n• بازنگری در اهداف حرفه‌ای",
                "این وضعیت نیاز به توجه و مداخله دارد.",
            ),
        ]
    }
}
