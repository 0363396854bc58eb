//! Payment Repository
//!
//! Payments are immutable once written: inserts and reads only.

use sqlx::SqliteConnection;

use super::RepoResult;
use crate::db::models::Payment;

const PAYMENT_SELECT: &str = "SELECT id, member_id, bill_id, method, payment_date, paid_amount, status, outstanding_balance FROM payment";

pub async fn insert(conn: &mut SqliteConnection, payment: &Payment) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO payment (id, member_id, bill_id, method, payment_date, paid_amount, status, outstanding_balance)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(payment.id)
    .bind(&payment.member_id)
    .bind(payment.bill_id)
    .bind(&payment.method)
    .bind(&payment.payment_date)
    .bind(payment.paid_amount)
    .bind(&payment.status)
    .bind(payment.outstanding_balance)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Payment>> {
    let sql = format!("{PAYMENT_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Payment>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn list_by_bill(conn: &mut SqliteConnection, bill_id: i64) -> RepoResult<Vec<Payment>> {
    let sql = format!("{PAYMENT_SELECT} WHERE bill_id = ? ORDER BY id");
    let rows = sqlx::query_as::<_, Payment>(&sql)
        .bind(bill_id)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

pub async fn list_by_member(
    conn: &mut SqliteConnection,
    member_id: &str,
) -> RepoResult<Vec<Payment>> {
    let sql = format!("{PAYMENT_SELECT} WHERE member_id = ? ORDER BY id");
    let rows = sqlx::query_as::<_, Payment>(&sql)
        .bind(member_id)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}
