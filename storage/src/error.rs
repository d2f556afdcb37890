//! Storage error types.
//!
//! Used by repository implementations and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The store could not be reached (connect, pool, or I/O failure).
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Already exists: {0}")]
    Conflict(String),
    #[error("Database error: {0}")]
    Database(String),
}

impl StorageError {
    /// True when the failure is a connectivity problem rather than a rejected statement.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::Conflict(db.message().to_string())
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Unavailable(err.to_string()),
            _ => Self::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_closed_is_unavailable() {
        let err = StorageError::from(sqlx::Error::PoolClosed);
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_row_not_found_is_database_error() {
        let err = StorageError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StorageError::Database(_)));
        assert!(!err.is_unavailable());
    }
}
