use std::collections::BTreeSet;

use azmoon_core::models::TestDefinition;

use crate::patch::{Patch, PatchOutcome};

/// WHOQOL-BREF only gets the aggregate scale when its cutoffs actually score
/// against a `total` the scale list does not define.
pub struct WhoqolTotalScale;

impl Patch for WhoqolTotalScale {
    fn slug(&self) -> &str {
        "whoqol-bref"
    }

    fn summary(&self) -> &str {
        "add total scale referenced by cutoffs"
    }

    fn apply(&self, def: &mut TestDefinition) -> PatchOutcome {
        let scale_keys: BTreeSet<&str> = def.scales.iter().map(|s| s.key.as_str()).collect();
        let missing: BTreeSet<&str> = def
            .cutoffs
            .iter()
            .map(|c| c.scale_key.as_str())
            .filter(|key| !scale_keys.contains(key))
            .collect();

        if !missing.contains("total") || def.scales.iter().any(|s| s.key == "total") {
            return PatchOutcome::Unchanged;
        }
        def.scales.push(super::total_scale());
        PatchOutcome::Changed {
            detail: "appended total scale".to_string(),
        }
    }
}
