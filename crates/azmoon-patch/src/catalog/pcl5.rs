use azmoon_core::models::{AnalysisTemplate, TestCutoff};

use super::{TemplateSet, cutoff, template};

/// PCL-5: PTSD Checklist for DSM-5. 20 items, total 0–80, screening
/// threshold at 33.
pub struct Pcl5;

impl TemplateSet for Pcl5 {
    fn slug(&self) -> &str {
        "pcl-5"
    }

    fn cutoffs(&self) -> Vec<TestCutoff> {
        vec![
            cutoff("total", 0.0, 30.0, "SubThreshold", "زیر آستانه تشخیص"),
            cutoff("total", 31.0, 32.0, "Borderline", "مرزی"),
            cutoff("total", 33.0, 80.0, "ProbablePTSD", "احتمال PTSD"),
        ]
    }

    fn analysis_templates(&self) -> Vec<AnalysisTemplate> {
        vec![
            template(
                "total",
                "SubThreshold",
                "زیر آستانه تشخیص PTSD",
                "نمره شما (۰-۳۰) زیر آستانه تشخیص PTSD است.",
                "اگرچه ممکن است برخی علائم استرس پس از سانحه را تجربه کرده باشید، اما این علائم در سطح بالینی نیستند.",
                "• اگر رویداد تروماتیکی تجربه کرده‌اید، صحبت با فرد مورد اعتماد مفید است\n• ورزش و فعالیت‌های آرام‌بخش",
                "این نتیجه صرفاً جهت آگاهی است.",
            ),
            template(
                "total",
                "Borderline",
                "نمره مرزی PTSD",
                "نمره شما (۳۱-۳۲) در محدوده مرزی قرار دارد.",
                "شما در آستانه تشخیص PTSD قرار دارید و بهتر است با متخصص مشورت کنید.",
                "• مشاوره با روان‌شناس متخصص تروما توصیه می‌شود\n• تکنیک‌های مدیریت استرس",
                "مراجعه به متخصص توصیه می‌شود.",
            ),
            template(
                "total",
                "ProbablePTSD",
                "احتمال اختلال استرس پس از سانحه (PTSD)",
                "نمره شما (۳۳+) نشان‌دهنده احتمال بالای PTSD است.",
                "علائمی مانند خاطرات ناخواسته، اجتناب، تغییرات خلقی، و واکنش‌پذیری بالا ممکن است زندگی روزمره را تحت تأثیر قرار دهد.",
                "• مراجعه به روان‌پزشک یا روان‌شناس متخصص تروما\n• درمان‌های مبتنی بر شواهد مانند EMDR و CPT مؤثر هستند",
                "این وضعیت نیاز به ارزیابی و درمان تخصصی دارد.",
            ),
        ]
    }
}
