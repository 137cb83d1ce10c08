use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{AnalysisTemplate, RiskRule, TestCutoff, TestQuestion, TestScale};

/// One questionnaire document, as stored in `<slug>.json`.
///
/// Field names on the wire are the web app's. Anything this tooling does not
/// model is captured in `extra`, so a load → patch → save round trip never
/// drops fields it did not touch.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestDefinition {
    pub slug: String,
    pub name: String,
    #[serde(rename = "nameFa")]
    pub name_fa: String,
    pub category: String,
    #[serde(rename = "categoryFa")]
    pub category_fa: String,
    pub description: String,
    #[serde(rename = "descriptionFa")]
    pub description_fa: String,
    pub analysis_type: AnalysisType,
    pub warning: String,
    #[serde(rename = "timeMinutes")]
    pub time_minutes: u32,
    pub scales: Vec<TestScale>,
    pub questions: Vec<TestQuestion>,
    #[serde(default)]
    pub cutoffs: Vec<TestCutoff>,
    #[serde(default)]
    pub analysis_templates: Vec<AnalysisTemplate>,
    #[serde(default)]
    pub risk_rules: Vec<RiskRule>,
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// How the web app turns raw answers into a result for this questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnalysisType {
    /// Scores map directly onto cutoff bands.
    Direct,
    /// Per-scale profile, no single total.
    Profile,
    /// Risk-rule driven interpretation.
    RuleBased,
}
