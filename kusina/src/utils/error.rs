//! Unified Error Handling
//!
//! Application-level error types returned across the upward interface.
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `NotFound` | A referenced order/bill/discount/member does not exist |
//! | `Conflict` | The operation collides with existing state |
//! | `Validation` | A required field is missing or malformed; caught before any write |
//! | `Database` | The underlying store call failed |
//! | `Consistency` | A cross-record invariant is broken in stored data |

use crate::db::repository::RepoError;

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Inconsistent state: {0}")]
    Consistency(String),
}

/// Result type for service operations
pub type AppResult<T> = Result<T, AppError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}
