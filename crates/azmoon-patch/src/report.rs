use serde::{Deserialize, Serialize};

/// Outcome of one corrective patch run against its target file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchReport {
    pub slug: String,
    pub summary: String,
    pub status: PatchStatus,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchStatus {
    Applied,
    Unchanged,
}

/// Outcome of one bulk template replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReport {
    pub slug: String,
    pub status: UpdateStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    Updated,
    SkippedMissing,
}
