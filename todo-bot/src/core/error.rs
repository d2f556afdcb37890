//! Error types for the bot core.
//!
//! [`BotError`] covers everything a single update can fail with. None of it is fatal to the
//! receive loop: the dispatcher turns each variant into a reply or a log line.

use storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// The task store could not be reached.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store rejected a statement.
    #[error("Storage error: {0}")]
    Storage(StorageError),

    /// Sending or answering through the messaging platform failed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Button payload that does not decode to a known action.
    #[error("Invalid callback payload: {0:?}")]
    InvalidCallback(String),
}

impl From<StorageError> for BotError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Unavailable(msg) => Self::StoreUnavailable(msg),
            other => Self::Storage(other),
        }
    }
}

impl From<teloxide::RequestError> for BotError {
    fn from(err: teloxide::RequestError) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_storage_maps_to_store_unavailable() {
        let err = BotError::from(StorageError::Unavailable("connection refused".into()));
        assert!(matches!(err, BotError::StoreUnavailable(_)));
    }

    #[test]
    fn test_other_storage_errors_are_kept() {
        let err = BotError::from(StorageError::Conflict("tasks.id".into()));
        assert!(matches!(err, BotError::Storage(StorageError::Conflict(_))));
    }
}
