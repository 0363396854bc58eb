//! Payment Ledger
//!
//! Amortizes payments against a bill's outstanding balance. Each payment
//! stores the resulting balance snapshot and derived status, the bill's
//! balance is updated, and a `payment` journal entry is appended, all on
//! one transaction, so concurrent applications cannot both consume the same
//! stale balance.

use sqlx::SqlitePool;

use super::calculator;
use crate::db::models::{ApplyPayment, Bill, HistoryEvent, Payment};
use crate::db::repository::{self as repo, IdFamily};
use crate::utils::time::{now_millis, parse_date};
use crate::utils::validation::{
    validate_positive_amount, validate_required_text, MAX_MEMBER_ID_LEN,
};
use crate::utils::{AppError, AppResult};

pub async fn apply_payment(pool: &SqlitePool, req: ApplyPayment) -> AppResult<Payment> {
    validate_required_text(&req.member_id, "member id", MAX_MEMBER_ID_LEN)?;
    parse_date(&req.payment_date)?;
    validate_positive_amount(req.paid_amount, "paid amount")?;

    let mut tx = pool.begin().await?;

    if !repo::member::exists(&mut tx, &req.member_id).await? {
        return Err(AppError::NotFound(format!(
            "Member {} not found",
            req.member_id
        )));
    }
    let bill = repo::bill::find_by_id(&mut tx, req.bill_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Bill {} not found", req.bill_id)))?;
    if bill.outstanding_balance > bill.total {
        return Err(AppError::Consistency(format!(
            "Bill {} outstanding balance {} exceeds its total {}",
            bill.id, bill.outstanding_balance, bill.total
        )));
    }

    // The schema initializes the balance to the total, so a fresh bill's
    // first payment amortizes against the full total.
    let (new_outstanding, status) = calculator::amortize(bill.outstanding_balance, req.paid_amount);

    let payment_id = repo::next_id(&mut tx, IdFamily::Payment).await?;
    let payment = Payment {
        id: payment_id,
        member_id: req.member_id.clone(),
        bill_id: req.bill_id,
        method: req.method.as_str().to_string(),
        payment_date: req.payment_date.clone(),
        paid_amount: req.paid_amount,
        status: status.as_str().to_string(),
        outstanding_balance: new_outstanding,
    };
    repo::payment::insert(&mut tx, &payment).await?;
    repo::bill::update_outstanding(&mut tx, req.bill_id, new_outstanding).await?;
    repo::member_history::append(
        &mut tx,
        &req.member_id,
        HistoryEvent::Payment(payment_id),
        now_millis(),
    )
    .await?;

    tx.commit().await?;

    tracing::info!(
        payment_id,
        bill_id = req.bill_id,
        amount = req.paid_amount,
        outstanding = new_outstanding,
        status = status.as_str(),
        "Payment applied"
    );
    Ok(payment)
}

/// Bills still awaiting payment. Settled bills remain listable through
/// [`super::billing::list_bills`] but are excluded here.
pub async fn list_open_bills(pool: &SqlitePool) -> AppResult<Vec<Bill>> {
    let mut conn = pool.acquire().await?;
    Ok(repo::bill::list_open(&mut conn).await?)
}

pub async fn payments_for_bill(pool: &SqlitePool, bill_id: i64) -> AppResult<Vec<Payment>> {
    let mut conn = pool.acquire().await?;
    Ok(repo::payment::list_by_bill(&mut conn, bill_id).await?)
}
