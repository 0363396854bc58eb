//! Bill Repository

use sqlx::SqliteConnection;

use super::RepoResult;
use crate::db::models::Bill;

const BILL_SELECT: &str =
    "SELECT id, discount_id, tax_rate, service_fee_rate, total, outstanding_balance FROM bill";

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Bill>> {
    let sql = format!("{BILL_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Bill>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn list_all(conn: &mut SqliteConnection) -> RepoResult<Vec<Bill>> {
    let sql = format!("{BILL_SELECT} ORDER BY id");
    let rows = sqlx::query_as::<_, Bill>(&sql).fetch_all(&mut *conn).await?;
    Ok(rows)
}

/// Bills still awaiting payment (outstanding balance above zero)
pub async fn list_open(conn: &mut SqliteConnection) -> RepoResult<Vec<Bill>> {
    let sql = format!("{BILL_SELECT} WHERE outstanding_balance > 0 ORDER BY id");
    let rows = sqlx::query_as::<_, Bill>(&sql).fetch_all(&mut *conn).await?;
    Ok(rows)
}

pub async fn insert(conn: &mut SqliteConnection, bill: &Bill) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO bill (id, discount_id, tax_rate, service_fee_rate, total, outstanding_balance)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(bill.id)
    .bind(bill.discount_id)
    .bind(bill.tax_rate)
    .bind(bill.service_fee_rate)
    .bind(bill.total)
    .bind(bill.outstanding_balance)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

pub async fn update_outstanding(
    conn: &mut SqliteConnection,
    id: i64,
    outstanding_balance: f64,
) -> RepoResult<()> {
    sqlx::query("UPDATE bill SET outstanding_balance = ? WHERE id = ?")
        .bind(outstanding_balance)
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM bill WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// How many bills reference a discount
pub async fn count_by_discount(conn: &mut SqliteConnection, discount_id: i64) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bill WHERE discount_id = ?")
        .bind(discount_id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(count)
}

/// Totals of the bills linked to a member's orders (analytics)
pub async fn totals_for_member(
    conn: &mut SqliteConnection,
    member_id: &str,
) -> RepoResult<Vec<f64>> {
    let totals: Vec<f64> = sqlx::query_scalar(
        "SELECT b.total FROM bill b JOIN orders o ON o.bill_id = b.id WHERE o.member_id = ?",
    )
    .bind(member_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(totals)
}
