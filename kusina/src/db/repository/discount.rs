//! Discount Repository
//!
//! Raw row access to the four discount tables. Assembling the tagged
//! [`crate::db::models::Discount`] union is the resolver's job.

use sqlx::SqliteConnection;

use super::RepoResult;
use crate::db::models::{DiscountRow, InHouseRow, PwdRow, SeniorRow, SpecialIdRow};

// ── Dispatch table ──────────────────────────────────────────────────

pub async fn find_row(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<DiscountRow>> {
    let row = sqlx::query_as::<_, DiscountRow>(
        "SELECT id, discount_type FROM discount WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(row)
}

pub async fn insert_discount(
    conn: &mut SqliteConnection,
    id: i64,
    discount_type: &str,
) -> RepoResult<()> {
    sqlx::query("INSERT INTO discount (id, discount_type) VALUES (?, ?)")
        .bind(id)
        .bind(discount_type)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Delete a discount; sub-table rows cascade with the dispatch row.
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM discount WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ── In-house ────────────────────────────────────────────────────────

pub async fn list_inhouse(conn: &mut SqliteConnection) -> RepoResult<Vec<InHouseRow>> {
    let rows = sqlx::query_as::<_, InHouseRow>(
        "SELECT discount_id, description, rate FROM inhouse_discount ORDER BY discount_id",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn find_inhouse(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<InHouseRow>> {
    let row = sqlx::query_as::<_, InHouseRow>(
        "SELECT discount_id, description, rate FROM inhouse_discount WHERE discount_id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(row)
}

pub async fn insert_inhouse(
    conn: &mut SqliteConnection,
    id: i64,
    description: &str,
    rate: f64,
) -> RepoResult<()> {
    sqlx::query("INSERT INTO inhouse_discount (discount_id, description, rate) VALUES (?, ?, ?)")
        .bind(id)
        .bind(description)
        .bind(rate)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

// ── Special ID ──────────────────────────────────────────────────────

pub async fn list_specialid(conn: &mut SqliteConnection) -> RepoResult<Vec<SpecialIdRow>> {
    let rows = sqlx::query_as::<_, SpecialIdRow>(
        "SELECT discount_id, member_id, rate FROM specialid_discount ORDER BY discount_id",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn find_specialid(
    conn: &mut SqliteConnection,
    id: i64,
) -> RepoResult<Option<SpecialIdRow>> {
    let row = sqlx::query_as::<_, SpecialIdRow>(
        "SELECT discount_id, member_id, rate FROM specialid_discount WHERE discount_id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(row)
}

pub async fn insert_specialid(
    conn: &mut SqliteConnection,
    id: i64,
    member_id: &str,
    rate: f64,
) -> RepoResult<()> {
    sqlx::query("INSERT INTO specialid_discount (discount_id, member_id, rate) VALUES (?, ?, ?)")
        .bind(id)
        .bind(member_id)
        .bind(rate)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

// ── Senior / PWD sub-records ────────────────────────────────────────

pub async fn list_senior(conn: &mut SqliteConnection) -> RepoResult<Vec<SeniorRow>> {
    let rows = sqlx::query_as::<_, SeniorRow>(
        "SELECT discount_id, id_number, birthdate FROM senior_detail ORDER BY discount_id",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn find_senior(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<SeniorRow>> {
    let row = sqlx::query_as::<_, SeniorRow>(
        "SELECT discount_id, id_number, birthdate FROM senior_detail WHERE discount_id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(row)
}

pub async fn insert_senior(
    conn: &mut SqliteConnection,
    id: i64,
    id_number: &str,
    birthdate: &str,
) -> RepoResult<()> {
    sqlx::query("INSERT INTO senior_detail (discount_id, id_number, birthdate) VALUES (?, ?, ?)")
        .bind(id)
        .bind(id_number)
        .bind(birthdate)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub async fn list_pwd(conn: &mut SqliteConnection) -> RepoResult<Vec<PwdRow>> {
    let rows = sqlx::query_as::<_, PwdRow>(
        "SELECT discount_id, id_number, disability FROM pwd_detail ORDER BY discount_id",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn find_pwd(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<PwdRow>> {
    let row = sqlx::query_as::<_, PwdRow>(
        "SELECT discount_id, id_number, disability FROM pwd_detail WHERE discount_id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(row)
}

pub async fn insert_pwd(
    conn: &mut SqliteConnection,
    id: i64,
    id_number: &str,
    disability: &str,
) -> RepoResult<()> {
    sqlx::query("INSERT INTO pwd_detail (discount_id, id_number, disability) VALUES (?, ?, ?)")
        .bind(id)
        .bind(id_number)
        .bind(disability)
        .execute(&mut *conn)
        .await?;
    Ok(())
}
