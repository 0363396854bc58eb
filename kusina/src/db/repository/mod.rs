//! Repository Module
//!
//! CRUD over the ledger's SQLite tables. Functions take a
//! `&mut SqliteConnection` rather than a pool reference so that every
//! statement of a multi-write service operation runs on the one connection
//! that owns the transaction.

pub mod bill;
pub mod discount;
pub mod dish;
pub mod member;
pub mod member_history;
pub mod order;
pub mod payment;

use sqlx::SqliteConnection;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("row not found".into()),
            e => RepoError::Database(e.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Record families whose integer ids are allocator-managed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdFamily {
    Order,
    Discount,
    Bill,
    Payment,
    History,
}

impl IdFamily {
    fn table(&self) -> &'static str {
        match self {
            IdFamily::Order => "orders",
            IdFamily::Discount => "discount",
            IdFamily::Bill => "bill",
            IdFamily::Payment => "payment",
            IdFamily::History => "member_history",
        }
    }
}

/// Next id for a record family: `max(existing ids) + 1`, or 1 when empty.
///
/// Must run on the same connection/transaction as the subsequent insert so
/// the allocate/insert pair is serialized by the store.
pub async fn next_id(conn: &mut SqliteConnection, family: IdFamily) -> RepoResult<i64> {
    let sql = format!("SELECT COALESCE(MAX(id), 0) + 1 FROM {}", family.table());
    let id: i64 = sqlx::query_scalar(&sql).fetch_one(&mut *conn).await?;
    Ok(id)
}
