//! azmoon-core
//!
//! Pure domain types for the questionnaire data files, plus read-only
//! consistency checks. No filesystem dependency — this is the shared
//! vocabulary of the azmoon tooling.

pub mod models;
pub mod validate;
