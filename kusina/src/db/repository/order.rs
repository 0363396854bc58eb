//! Order Repository

use sqlx::SqliteConnection;

use super::RepoResult;
use crate::db::models::{DishCount, Order, OrderLineItem, PricedLineItem};

const ORDER_SELECT: &str = "SELECT id, member_id, bill_id, order_date FROM orders";

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Order>> {
    let sql = format!("{ORDER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

/// Orders with no bill yet, i.e. the billing surface's selection list
pub async fn list_unbilled(conn: &mut SqliteConnection) -> RepoResult<Vec<Order>> {
    let sql = format!("{ORDER_SELECT} WHERE bill_id IS NULL ORDER BY id");
    let rows = sqlx::query_as::<_, Order>(&sql).fetch_all(&mut *conn).await?;
    Ok(rows)
}

pub async fn create(
    conn: &mut SqliteConnection,
    id: i64,
    member_id: &str,
    order_date: &str,
) -> RepoResult<()> {
    sqlx::query("INSERT INTO orders (id, member_id, bill_id, order_date) VALUES (?, ?, NULL, ?)")
        .bind(id)
        .bind(member_id)
        .bind(order_date)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub async fn add_line_item(
    conn: &mut SqliteConnection,
    order_id: i64,
    dish_id: i64,
    quantity: i64,
) -> RepoResult<()> {
    sqlx::query("INSERT INTO order_line_item (order_id, dish_id, quantity) VALUES (?, ?, ?)")
        .bind(order_id)
        .bind(dish_id)
        .bind(quantity)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub async fn line_items(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> RepoResult<Vec<OrderLineItem>> {
    let rows = sqlx::query_as::<_, OrderLineItem>(
        "SELECT order_id, dish_id, quantity FROM order_line_item WHERE order_id = ? ORDER BY dish_id",
    )
    .bind(order_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

/// Line items joined with current dish prices (no price snapshotting)
pub async fn priced_line_items(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> RepoResult<Vec<PricedLineItem>> {
    let rows = sqlx::query_as::<_, PricedLineItem>(
        "SELECT d.price AS price, oli.quantity AS quantity
         FROM order_line_item oli
         JOIN dish d ON d.id = oli.dish_id
         WHERE oli.order_id = ?
         ORDER BY oli.dish_id",
    )
    .bind(order_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

/// One-way link from the order to its bill
pub async fn link_bill(
    conn: &mut SqliteConnection,
    order_id: i64,
    bill_id: i64,
) -> RepoResult<()> {
    sqlx::query("UPDATE orders SET bill_id = ? WHERE id = ?")
        .bind(bill_id)
        .bind(order_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Delete an order and its line items (the order owns them)
pub async fn delete(conn: &mut SqliteConnection, order_id: i64) -> RepoResult<bool> {
    sqlx::query("DELETE FROM order_line_item WHERE order_id = ?")
        .bind(order_id)
        .execute(&mut *conn)
        .await?;
    let result = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(order_id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_by_member(conn: &mut SqliteConnection, member_id: &str) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE member_id = ?")
        .bind(member_id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(count)
}

/// Top dishes by total ordered quantity across a member's orders
pub async fn top_dishes_for_member(
    conn: &mut SqliteConnection,
    member_id: &str,
    limit: i64,
) -> RepoResult<Vec<DishCount>> {
    let rows = sqlx::query_as::<_, DishCount>(
        "SELECT d.name AS name, SUM(oli.quantity) AS total_quantity
         FROM orders o
         JOIN order_line_item oli ON oli.order_id = o.id
         JOIN dish d ON d.id = oli.dish_id
         WHERE o.member_id = ?
         GROUP BY d.id, d.name
         ORDER BY total_quantity DESC, d.name
         LIMIT ?",
    )
    .bind(member_id)
    .bind(limit)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}
