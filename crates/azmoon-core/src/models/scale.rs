use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named sub-dimension of a questionnaire with its own scorable range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestScale {
    /// Unique identifier linking questions, cutoffs, and analysis templates
    /// to this scale.
    pub key: String,
    pub name: String,
    #[serde(rename = "nameFa")]
    pub name_fa: String,
}
