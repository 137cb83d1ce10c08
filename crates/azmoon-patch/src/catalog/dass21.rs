use azmoon_core::models::{AnalysisTemplate, TestCutoff};

use super::{TemplateSet, cutoff, template};

/// DASS-21: Depression Anxiety Stress Scales, short form. Three 7-item
/// subscales, doubled scores 0–42 each.
///
/// Analysis templates cover the commonly reached bands only; the remaining
/// bands are flagged by `azmoon check` until content is written for them.
pub struct Dass21;

impl TemplateSet for Dass21 {
    fn slug(&self) -> &str {
        "dass-21"
    }

    fn cutoffs(&self) -> Vec<TestCutoff> {
        vec![
            cutoff("depression", 0.0, 9.0, "Normal", "طبیعی"),
            cutoff("depression", 10.0, 13.0, "Mild", "خفیف"),
            cutoff("depression", 14.0, 20.0, "Moderate", "متوسط"),
            cutoff("depression", 21.0, 27.0, "Severe", "شدید"),
            cutoff("depression", 28.0, 42.0, "Extremely Severe", "بسیار شدید"),
            cutoff("anxiety", 0.0, 7.0, "Normal", "طبیعی"),
            cutoff("anxiety", 8.0, 9.0, "Mild", "خفیف"),
            cutoff("anxiety", 10.0, 14.0, "Moderate", "متوسط"),
            cutoff("anxiety", 15.0, 19.0, "Severe", "شدید"),
            cutoff("anxiety", 20.0, 42.0, "Extremely Severe", "بسیار شدید"),
            cutoff("stress", 0.0, 14.0, "Normal", "طبیعی"),
            cutoff("stress", 15.0, 18.0, "Mild", "خفیف"),
            cutoff("stress", 19.0, 25.0, "Moderate", "متوسط"),
            cutoff("stress", 26.0, 33.0, "Severe", "شدید"),
            cutoff("stress", 34.0, 42.0, "Extremely Severe", "بسیار شدید"),
        ]
    }

    fn analysis_templates(&self) -> Vec<AnalysisTemplate> {
        vec![
            template(
                "depression",
                "Normal",
                "افسردگی: طبیعی",
                "نمره افسردگی شما در محدوده طبیعی است.",
                "شما علائم افسردگی قابل توجهی نشان نمی‌دهید.",
                "• حفظ سبک زندگی سالم",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "depression",
                "Moderate",
                "افسردگی: متوسط",
                "نمره افسردگی شما در سطح متوسط است.",
                "علائم افسردگی متوسط که می‌تواند بر زندگی روزمره تأثیر بگذارد.",
                "• مشاوره با روان‌شناس توصیه می‌شود",
                "مراجعه به متخصص توصیه می‌شود.",
            ),
            template(
                "depression",
                "Severe",
                "افسردگی: شدید",
                "نمره افسردگی شما در سطح شدید است.",
                "علائم افسردگی شدید که نیاز به مداخله تخصصی دارد.",
                "• مراجعه فوری به روان‌پزشک",
                "این وضعیت نیاز به توجه فوری دارد.",
            ),
            template(
                "anxiety",
                "Normal",
                "اضطراب: طبیعی",
                "نمره اضطراب شما در محدوده طبیعی است.",
                "شما علائم اضطراب قابل توجهی نشان نمی‌دهید.",
                "• حفظ آرامش و سبک زندگی سالم",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "anxiety",
                "Moderate",
                "اضطراب: متوسط",
                "نمره اضطراب شما در سطح متوسط است.",
                "علائم اضطراب متوسط که ممکن است نگران‌کننده باشد.",
                "• تکنیک‌های آرام‌سازی\n• مشاوره با متخصص",
                "مراجعه به متخصص توصیه می‌شود.",
            ),
            template(
                "stress",
                "Normal",
                "استرس: طبیعی",
                "نمره استرس شما در محدوده طبیعی است.",
                "شما استرس را به خوبی مدیریت می‌کنید.",
                "• ادامه روش‌های مدیریت استرس فعلی",
                "این نتیجه جایگزین ارزیابی تخصصی نیست.",
            ),
            template(
                "stress",
                "Moderate",
                "استرس: متوسط",
                "نمره استرس شما در سطح متوسط است.",
                "سطح استرس شما بالاتر از حد معمول است.",
                "• تکنیک‌های مدیریت استرس\n• ورزش و استراحت کافی",
                "توجه به کاهش استرس توصیه می‌شود.",
            ),
        ]
    }
}
