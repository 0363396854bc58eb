//! Order Placement
//!
//! Entry point of the ledger's data flow: an order and its line items are
//! written together with the member's `order` journal entry, in one
//! transaction.

use std::collections::HashSet;

use sqlx::SqlitePool;

use crate::db::models::{HistoryEvent, Order, PlaceOrder};
use crate::db::repository::{self as repo, IdFamily};
use crate::utils::time::{now_millis, today_string};
use crate::utils::validation::{validate_required_text, MAX_MEMBER_ID_LEN};
use crate::utils::{AppError, AppResult};

/// Place an order for a member.
///
/// Validates the member and every dish, then writes the order, its line
/// items and the journal entry atomically.
pub async fn place_order(pool: &SqlitePool, req: PlaceOrder) -> AppResult<Order> {
    validate_required_text(&req.member_id, "member id", MAX_MEMBER_ID_LEN)?;
    if req.items.is_empty() {
        return Err(AppError::Validation(
            "order must contain at least one line item".into(),
        ));
    }
    let mut seen = HashSet::new();
    for item in &req.items {
        if item.quantity <= 0 {
            return Err(AppError::Validation(format!(
                "quantity for dish {} must be positive",
                item.dish_id
            )));
        }
        if !seen.insert(item.dish_id) {
            return Err(AppError::Validation(format!(
                "dish {} appears more than once",
                item.dish_id
            )));
        }
    }

    let mut tx = pool.begin().await?;

    if !repo::member::exists(&mut tx, &req.member_id).await? {
        return Err(AppError::NotFound(format!(
            "Member {} not found",
            req.member_id
        )));
    }
    for item in &req.items {
        if repo::dish::find_by_id(&mut tx, item.dish_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Dish {} not found", item.dish_id)));
        }
    }

    let order_id = repo::next_id(&mut tx, IdFamily::Order).await?;
    let order_date = today_string();
    repo::order::create(&mut tx, order_id, &req.member_id, &order_date).await?;
    for item in &req.items {
        repo::order::add_line_item(&mut tx, order_id, item.dish_id, item.quantity).await?;
    }
    repo::member_history::append(
        &mut tx,
        &req.member_id,
        HistoryEvent::Order(order_id),
        now_millis(),
    )
    .await?;

    tx.commit().await?;

    tracing::info!(order_id, member_id = %req.member_id, items = req.items.len(), "Order placed");
    Ok(Order {
        id: order_id,
        member_id: req.member_id,
        bill_id: None,
        order_date,
    })
}

/// Orders that have no bill yet; what the billing surface may select from.
pub async fn list_unbilled_orders(pool: &SqlitePool) -> AppResult<Vec<Order>> {
    let mut conn = pool.acquire().await?;
    Ok(repo::order::list_unbilled(&mut conn).await?)
}

/// Delete an order and the line items it owns. Journal entries referencing
/// the order are left untouched.
pub async fn delete_order(pool: &SqlitePool, order_id: i64) -> AppResult<bool> {
    let mut tx = pool.begin().await?;
    let deleted = repo::order::delete(&mut tx, order_id).await?;
    tx.commit().await?;
    if deleted {
        tracing::info!(order_id, "Order deleted");
    }
    Ok(deleted)
}
