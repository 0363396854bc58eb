//! Member History Repository
//!
//! Append-only journal: this module exposes inserts and reads, nothing else.

use sqlx::SqliteConnection;

use super::{next_id, IdFamily, RepoResult};
use crate::db::models::{HistoryEntry, HistoryEvent};

/// Append one journal entry, allocating its id on the caller's connection.
pub async fn append(
    conn: &mut SqliteConnection,
    member_id: &str,
    event: HistoryEvent,
    event_at: i64,
) -> RepoResult<i64> {
    let id = next_id(conn, IdFamily::History).await?;
    let (order_id, payment_id) = match event {
        HistoryEvent::Order(order_id) => (Some(order_id), None),
        HistoryEvent::Payment(payment_id) => (None, Some(payment_id)),
    };
    sqlx::query(
        "INSERT INTO member_history (id, member_id, event_type, order_id, payment_id, event_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(member_id)
    .bind(event.event_type().as_str())
    .bind(order_id)
    .bind(payment_id)
    .bind(event_at)
    .execute(&mut *conn)
    .await?;
    Ok(id)
}

/// Journal for one member, newest first
pub async fn list_by_member(
    conn: &mut SqliteConnection,
    member_id: &str,
) -> RepoResult<Vec<HistoryEntry>> {
    let rows = sqlx::query_as::<_, HistoryEntry>(
        "SELECT id, member_id, event_type, order_id, payment_id, event_at
         FROM member_history
         WHERE member_id = ?
         ORDER BY event_at DESC, id DESC",
    )
    .bind(member_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}
