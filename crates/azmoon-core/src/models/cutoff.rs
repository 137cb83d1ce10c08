use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A labeled numeric sub-range of a scale's score domain.
///
/// Bounds are `f64` because SCL-90-R's GSI cutoffs use fractional bounds;
/// every other instrument scores in whole points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestCutoff {
    #[serde(rename = "scaleKey")]
    pub scale_key: String,
    pub min: f64,
    pub max: f64,
    pub label: String,
    #[serde(rename = "labelFa")]
    pub label_fa: String,
}
