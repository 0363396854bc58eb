//! Bill Generator
//!
//! Turns an order's line items into a bill: subtotal at current dish prices,
//! at most one discount (existing, or a special-ID created inline), tax and
//! service fee each applied to the discounted subtotal. The whole sequence,
//! including the optional special-ID creation and the order link, runs in
//! one transaction, so a failure never leaves the order pointing at a bill
//! that does not exist.

use sqlx::SqlitePool;

use super::{calculator, discounts};
use crate::db::models::{Bill, DiscountSelection, GenerateBill, SPECIAL_ID_RATE};
use crate::db::repository::{self as repo, IdFamily};
use crate::utils::{AppError, AppResult};

pub async fn generate_bill(pool: &SqlitePool, req: GenerateBill) -> AppResult<Bill> {
    let mut tx = pool.begin().await?;

    let order = repo::order::find_by_id(&mut tx, req.order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order {} not found", req.order_id)))?;
    if let Some(existing) = order.bill_id {
        return Err(match repo::bill::find_by_id(&mut tx, existing).await? {
            Some(_) => AppError::Conflict(format!(
                "Order {} is already billed (bill {existing})",
                req.order_id
            )),
            None => AppError::Consistency(format!(
                "Order {} links to missing bill {existing}",
                req.order_id
            )),
        });
    }

    let (discount_id, discount_rate) = match &req.discount {
        DiscountSelection::None => (None, 0.0),
        DiscountSelection::Existing(id) => {
            (Some(*id), discounts::resolve(&mut tx, *id).await?.rate())
        }
        DiscountSelection::NewSpecialId(special) => {
            // The special ID belongs to whoever placed the order
            if special.member_id != order.member_id {
                return Err(AppError::Validation(format!(
                    "special-ID member {} does not match order member {}",
                    special.member_id, order.member_id
                )));
            }
            let id = discounts::create_special_id_tx(&mut tx, special).await?;
            (Some(id), SPECIAL_ID_RATE)
        }
    };

    let priced = repo::order::priced_line_items(&mut tx, req.order_id).await?;
    let pairs: Vec<(f64, i64)> = priced.iter().map(|li| (li.price, li.quantity)).collect();
    let subtotal = calculator::order_subtotal(&pairs);
    let totals =
        calculator::compute_bill_totals(subtotal, discount_rate, req.tax_rate, req.service_fee_rate);

    let bill_id = repo::next_id(&mut tx, IdFamily::Bill).await?;
    let bill = Bill {
        id: bill_id,
        discount_id,
        tax_rate: req.tax_rate,
        service_fee_rate: req.service_fee_rate,
        total: totals.total,
        outstanding_balance: totals.total,
    };
    repo::bill::insert(&mut tx, &bill).await?;
    repo::order::link_bill(&mut tx, req.order_id, bill_id).await?;

    tx.commit().await?;

    tracing::info!(
        bill_id,
        order_id = req.order_id,
        subtotal = totals.subtotal,
        discount = totals.discount_amount,
        total = totals.total,
        "Bill generated"
    );
    Ok(bill)
}

pub async fn list_bills(pool: &SqlitePool) -> AppResult<Vec<Bill>> {
    let mut conn = pool.acquire().await?;
    Ok(repo::bill::list_all(&mut conn).await?)
}

/// Delete a bill. Referencing orders are unlinked by the store
/// (`ON DELETE SET NULL`); the referenced discount record stays. A bill with
/// recorded payments is an audit anchor and cannot be deleted.
pub async fn delete_bill(pool: &SqlitePool, bill_id: i64) -> AppResult<bool> {
    let mut tx = pool.begin().await?;
    if repo::bill::find_by_id(&mut tx, bill_id).await?.is_none() {
        return Ok(false);
    }
    let payments = repo::payment::list_by_bill(&mut tx, bill_id).await?;
    if !payments.is_empty() {
        return Err(AppError::Conflict(format!(
            "Bill {bill_id} has {} recorded payment(s)",
            payments.len()
        )));
    }
    let deleted = repo::bill::delete(&mut tx, bill_id).await?;
    tx.commit().await?;

    tracing::info!(bill_id, "Bill deleted");
    Ok(deleted)
}
