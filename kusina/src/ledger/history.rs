//! History Journal
//!
//! Read side of the per-member journal. Appending happens inside the order
//! and payment transactions; nothing here mutates entries. Descriptions are
//! resolved at read time by joining against orders/payments, falling back to
//! the bare id when the referent is gone.

use sqlx::SqlitePool;

use crate::db::models::{
    DishCount, HistoryEntry, HistoryEntryDetail, HistoryEventType, MemberAnalytics, PaymentStatus,
};
use crate::db::repository as repo;
use crate::utils::{AppError, AppResult};

/// Journal entries for one member, newest first.
pub async fn history_for(pool: &SqlitePool, member_id: &str) -> AppResult<Vec<HistoryEntry>> {
    let mut conn = pool.acquire().await?;
    Ok(repo::member_history::list_by_member(&mut conn, member_id).await?)
}

/// Journal entries with human-readable descriptions resolved.
pub async fn history_detail_for(
    pool: &SqlitePool,
    member_id: &str,
) -> AppResult<Vec<HistoryEntryDetail>> {
    let mut conn = pool.acquire().await?;
    let entries = repo::member_history::list_by_member(&mut conn, member_id).await?;

    let mut details = Vec::with_capacity(entries.len());
    for entry in entries {
        let description = match (entry.event_type.as_str(), entry.order_id, entry.payment_id) {
            (t, Some(order_id), _) if t == HistoryEventType::Order.as_str() => {
                match repo::order::find_by_id(&mut conn, order_id).await? {
                    Some(order) => format!("Order #{order_id} - {}", order.order_date),
                    None => format!("Order #{order_id}"),
                }
            }
            (t, _, Some(payment_id)) if t == HistoryEventType::Payment.as_str() => {
                match repo::payment::find_by_id(&mut conn, payment_id).await? {
                    Some(p) => format!("Payment #{payment_id} - ${:.2} ({})", p.paid_amount, p.method),
                    None => format!("Payment #{payment_id}"),
                }
            }
            _ => {
                return Err(AppError::Consistency(format!(
                    "history entry {} has no referent",
                    entry.id
                )))
            }
        };
        details.push(HistoryEntryDetail { entry, description });
    }
    Ok(details)
}

/// Aggregate a member's ordering and payment behavior.
pub async fn analytics_for(pool: &SqlitePool, member_id: &str) -> AppResult<MemberAnalytics> {
    let mut conn = pool.acquire().await?;

    if !repo::member::exists(&mut conn, member_id).await? {
        return Err(AppError::NotFound(format!("Member {member_id} not found")));
    }

    let total_orders = repo::order::count_by_member(&mut conn, member_id).await?;
    let most_ordered_dishes: Vec<DishCount> =
        repo::order::top_dishes_for_member(&mut conn, member_id, 5).await?;

    let payments = repo::payment::list_by_member(&mut conn, member_id).await?;
    let full_payments = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Paid.as_str())
        .count() as i64;
    let partial_payments = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Partial.as_str())
        .count() as i64;

    let totals = repo::bill::totals_for_member(&mut conn, member_id).await?;
    let (average_bill_total, highest_bill_total, lowest_bill_total) = if totals.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        let sum: f64 = totals.iter().sum();
        let highest = totals.iter().copied().fold(f64::MIN, f64::max);
        let lowest = totals.iter().copied().fold(f64::MAX, f64::min);
        (sum / totals.len() as f64, highest, lowest)
    };

    Ok(MemberAnalytics {
        total_orders,
        most_ordered_dishes,
        full_payments,
        partial_payments,
        total_payments: payments.len() as i64,
        average_bill_total,
        highest_bill_total,
        lowest_bill_total,
    })
}
