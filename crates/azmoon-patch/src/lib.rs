//! azmoon-patch
//!
//! Maintenance operations for the questionnaire data files. Two independent
//! operations, both load → mutate → save over `azmoon_storage::TestStore`:
//!
//! - corrective patches (`patches`, `run::apply_patches`) — targeted fixes
//!   for known inconsistencies in individual files: scale-key renames and
//!   insertion of missing aggregate scales, idempotent by construction;
//! - bulk template updates (`catalog`, `run::apply_template_updates`) —
//!   wholesale replacement of a questionnaire's `cutoffs` and
//!   `analysis_templates` from the hand-authored catalog, skipping files
//!   that do not exist.

pub mod catalog;
pub mod error;
pub mod patch;
pub mod patches;
pub mod report;
pub mod run;

pub use crate::error::PatchError;
pub use crate::patch::{Patch, PatchOutcome};
pub use crate::report::{PatchReport, PatchStatus, UpdateReport, UpdateStatus};
