use azmoon_core::models::TestDefinition;

use crate::patch::{Patch, PatchOutcome};

/// ENRICH's cutoffs score against an aggregate `total` scale that was missing
/// from the scale list. Appends it once.
pub struct EnrichTotalScale;

impl Patch for EnrichTotalScale {
    fn slug(&self) -> &str {
        "enrich"
    }

    fn summary(&self) -> &str {
        "add missing total scale"
    }

    fn apply(&self, def: &mut TestDefinition) -> PatchOutcome {
        if def.scales.iter().any(|s| s.key == "total") {
            return PatchOutcome::Unchanged;
        }
        def.scales.push(super::total_scale());
        PatchOutcome::Changed {
            detail: "appended total scale".to_string(),
        }
    }
}
