//! Dish Repository
//!
//! Read-only: the menu is administered elsewhere; the ledger reads current
//! prices at bill-generation time.

use sqlx::SqliteConnection;

use super::RepoResult;
use crate::db::models::Dish;

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Dish>> {
    let row = sqlx::query_as::<_, Dish>("SELECT id, name, price FROM dish WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}
