//! Store Errors

use thiserror::Error;

use crate::models::ListKind;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the game store. None of them are fatal to the app.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("local storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read '{key}' from local storage: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write '{key}' to local storage: {reason}")]
    Write { key: String, reason: String },

    #[error("saved games could not be read, so changes are not being saved")]
    Unloaded,

    #[error("failed to serialize game lists: {0}")]
    Serialize(String),

    #[error("no game at position {index} of the {list} list")]
    NoSuchGame { list: ListKind, index: usize },
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialize(err.to_string())
    }
}
