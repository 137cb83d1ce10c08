use azmoon_core::models::{TestDefinition, TestScale};

use crate::patch::{Patch, PatchOutcome};

/// MBI shipped with a scale list that did not match its cutoffs: the cutoffs
/// score against `emotional_exhaustion` / `personal_accomplishment` while the
/// scales and questions used short keys. Rewrites the scale list to the three
/// canonical MBI dimensions and renames the question references.
pub struct MbiScaleKeys;

fn corrected_scales() -> Vec<TestScale> {
    vec![
        TestScale {
            key: "emotional_exhaustion".to_string(),
            name: "Emotional Exhaustion".to_string(),
            name_fa: "خستگی هیجانی".to_string(),
        },
        TestScale {
            key: "depersonalization".to_string(),
            name: "Depersonalization".to_string(),
            name_fa: "مسخ شخصیت".to_string(),
        },
        TestScale {
            key: "personal_accomplishment".to_string(),
            name: "Personal Accomplishment".to_string(),
            name_fa: "موفقیت فردی".to_string(),
        },
    ]
}

impl Patch for MbiScaleKeys {
    fn slug(&self) -> &str {
        "mbi"
    }

    fn summary(&self) -> &str {
        "align scale keys with cutoffs"
    }

    fn apply(&self, def: &mut TestDefinition) -> PatchOutcome {
        let mut renamed = 0usize;
        for question in &mut def.questions {
            match question.scale_key.as_str() {
                "exhaustion" => {
                    question.scale_key = "emotional_exhaustion".to_string();
                    renamed += 1;
                }
                "accomplishment" => {
                    question.scale_key = "personal_accomplishment".to_string();
                    renamed += 1;
                }
                _ => {}
            }
        }

        let scales = corrected_scales();
        if renamed == 0 && def.scales == scales {
            return PatchOutcome::Unchanged;
        }
        def.scales = scales;
        PatchOutcome::Changed {
            detail: format!("rewrote scale list, renamed {renamed} question scale keys"),
        }
    }
}
