//! Member Repository
//!
//! Read-only: members are administered by an out-of-scope surface and the
//! ledger never mutates them.

use sqlx::SqliteConnection;

use super::RepoResult;
use crate::db::models::Member;

pub async fn find_by_id(conn: &mut SqliteConnection, id: &str) -> RepoResult<Option<Member>> {
    let row = sqlx::query_as::<_, Member>(
        "SELECT id, name, contact_number FROM member WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(row)
}

pub async fn exists(conn: &mut SqliteConnection, id: &str) -> RepoResult<bool> {
    Ok(find_by_id(conn, id).await?.is_some())
}
