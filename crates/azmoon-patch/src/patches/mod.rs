//! One module per corrective fix. Each fix targets a single questionnaire
//! file and guards against re-application, so re-running the whole set is
//! safe.

pub mod enrich_total_scale;
pub mod mbi_scale_keys;
pub mod whoqol_total_scale;

use azmoon_core::models::TestScale;

use crate::patch::Patch;

/// All corrective patches, in application order.
pub fn all_patches() -> Vec<Box<dyn Patch>> {
    vec![
        Box::new(mbi_scale_keys::MbiScaleKeys),
        Box::new(enrich_total_scale::EnrichTotalScale),
        Box::new(whoqol_total_scale::WhoqolTotalScale),
    ]
}

/// The aggregate scale entry both total-scale fixes insert.
fn total_scale() -> TestScale {
    TestScale {
        key: "total".to_string(),
        name: "Total".to_string(),
        name_fa: "نمره کل".to_string(),
    }
}
