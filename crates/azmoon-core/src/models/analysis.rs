use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Interpretive text shown for one (scale, severity band) pair. The Persian
/// body text is the product content; `level_label` matches a cutoff's `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisTemplate {
    pub level_label: String,
    #[serde(rename = "scaleKey")]
    pub scale_key: String,
    pub title: String,
    pub summary: String,
    pub details: String,
    pub recommendations: String,
    pub disclaimer: String,
}
