use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("questionnaire file not found: {path}")]
    NotFound { path: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
