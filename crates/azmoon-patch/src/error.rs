use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("storage error: {0}")]
    Storage(#[from] azmoon_storage::StorageError),

    #[error("no replacement content defined for questionnaire: {0}")]
    UnknownQuestionnaire(String),
}
