use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestQuestion {
    pub order: u32,
    pub text: String,
    #[serde(rename = "scaleKey")]
    pub scale_key: String,
    /// Flags an item whose answer can trigger a risk rule. Absent in most
    /// documents; kept absent on rewrite.
    #[serde(rename = "riskItem", skip_serializing_if = "Option::is_none")]
    pub risk_item: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    pub options: Vec<TestOption>,
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestOption {
    pub text: String,
    pub score: i32,
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
