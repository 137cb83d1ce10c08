//! azmoon-storage
//!
//! Filesystem persistence for questionnaire documents. Thin wrapper around
//! `std::fs` + `serde_json`: one JSON document per questionnaire, addressed
//! as `<data-dir>/<slug>.json`.

pub mod error;
pub mod json;
pub mod store;

pub use crate::error::StorageError;
pub use crate::store::TestStore;
