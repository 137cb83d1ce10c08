use azmoon_core::models::{AnalysisTemplate, TestCutoff};

use super::{TemplateSet, cutoff, template};

/// IES-R: Impact of Event Scale, Revised. 22 items, total 0–88.
pub struct IesR;

impl TemplateSet for IesR {
    fn slug(&self) -> &str {
        "ies-r"
    }

    fn cutoffs(&self) -> Vec<TestCutoff> {
        vec![
            cutoff("total", 0.0, 23.0, "Normal", "طبیعی"),
            cutoff("total", 24.0, 32.0, "Mild", "خفیف"),
            cutoff("total", 33.0, 36.0, "Moderate", "متوسط"),
            cutoff("total", 37.0, 88.0, "Severe", "شدید (احتمال PTSD)"),
        ]
    }

    fn analysis_templates(&self) -> Vec<AnalysisTemplate> {
        vec![
            template(
                "total",
                "Normal",
                "واکنش طبیعی به رویداد",
                "نمره شما (۰-۲۳) نشان‌دهنده واکنش طبیعی به رویداد استرس‌زا است.",
                "شما علائم قابل توجهی از استرس پس از رویداد نشان نمی‌دهید.",
                "• ادامه فعالیت‌های روزمره\n• صحبت با دیگران در صورت نیاز",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "total",
                "Mild",
                "تأثیر خفیف رویداد",
                "نمره شما (۲۴-۳۲) نشان‌دهنده تأثیر خفیف رویداد استرس‌زا است.",
                "برخی علائم استرس پس از رویداد تجربه می‌کنید که نیاز به توجه دارد.",
                "• تکنیک‌های آرام‌سازی\n• صحبت با فرد مورد اعتماد\n• در صورت تداوم، مشاوره با متخصص",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "total",
                "Moderate",
                "تأثیر متوسط رویداد",
                "نمره شما (۳۳-۳۶) نشان‌دهنده تأثیر قابل توجه رویداد بر شماست.",
                "علائمی مانند افکار مزاحم، اجتناب، یا بی‌خوابی ممکن است آزاردهنده باشند.",
                "• مشاوره با روان‌شناس توصیه می‌شود\n• درمان‌های مبتنی بر تروما می‌توانند کمک‌کننده باشند",
                "مراجعه به متخصص توصیه می‌شود.",
            ),
            template(
                "total",
                "Severe",
                "تأثیر شدید - احتمال PTSD",
                "نمره شما (۳۷+) نشان‌دهنده تأثیر شدید رویداد و احتمال PTSD است.",
                "علائم شدیدی تجربه می‌کنید که می‌تواند بر کیفیت زندگی تأثیر جدی بگذارد.",
                "• مراجعه به روان‌پزشک یا روان‌شناس متخصص تروما\n• درمان‌های تخصصی مانند EMDR",
                "این وضعیت نیاز به ارزیابی و درمان تخصصی دارد.",
            ),
        ]
    }
}
