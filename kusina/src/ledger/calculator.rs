//! Bill Calculator
//!
//! Money math for bill totals and payment amortization.
//! Uses rust_decimal for precise calculations, stores as f64.

use rust_decimal::prelude::*;

use crate::db::models::PaymentStatus;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Subtotal over (unit price, quantity) pairs at current prices
pub fn order_subtotal(items: &[(f64, i64)]) -> f64 {
    let sum = items.iter().fold(Decimal::ZERO, |acc, (price, quantity)| {
        acc + to_decimal(*price) * Decimal::from(*quantity)
    });
    to_f64(sum)
}

/// Breakdown of a generated bill
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillTotals {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub total: f64,
}

/// Compute a bill's totals from its subtotal and rates.
///
/// `total = (subtotal - subtotal * discount_rate) * (1 + tax + servicefee)`:
/// tax and service fee each apply to the discounted subtotal and do not
/// compound on each other. Rates pass through as given; this layer does not
/// bound them.
pub fn compute_bill_totals(
    subtotal: f64,
    discount_rate: f64,
    tax_rate: f64,
    service_fee_rate: f64,
) -> BillTotals {
    let subtotal_d = to_decimal(subtotal);
    let discount = subtotal_d * to_decimal(discount_rate);
    let discounted = subtotal_d - discount;
    let total = discounted
        + discounted * to_decimal(tax_rate)
        + discounted * to_decimal(service_fee_rate);

    BillTotals {
        subtotal: to_f64(subtotal_d),
        discount_amount: to_f64(discount),
        total: to_f64(total),
    }
}

/// Amortize one payment against an outstanding balance.
///
/// Overpayment floors the balance at zero; no change/refund entity exists.
/// Status is `paid` exactly when the resulting balance reaches zero.
pub fn amortize(outstanding: f64, paid_amount: f64) -> (f64, PaymentStatus) {
    let remaining = (to_decimal(outstanding) - to_decimal(paid_amount)).max(Decimal::ZERO);
    let new_outstanding = to_f64(remaining);
    let status = if new_outstanding == 0.0 {
        PaymentStatus::Paid
    } else {
        PaymentStatus::Partial
    };
    (new_outstanding, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtotal_of_line_items() {
        // dish A: $10.00 x2, dish B: $5.00 x1
        assert_eq!(order_subtotal(&[(10.0, 2), (5.0, 1)]), 25.0);
    }

    #[test]
    fn test_subtotal_empty_order() {
        assert_eq!(order_subtotal(&[]), 0.0);
    }

    #[test]
    fn test_worked_example_inhouse_discount() {
        // $25.00 subtotal, 10% in-house, 12% tax, no service fee
        let totals = compute_bill_totals(25.0, 0.10, 0.12, 0.0);
        assert_eq!(totals.subtotal, 25.0);
        assert_eq!(totals.discount_amount, 2.50);
        assert_eq!(totals.total, 25.20);
    }

    #[test]
    fn test_no_discount() {
        let totals = compute_bill_totals(100.0, 0.0, 0.12, 0.10);
        assert_eq!(totals.discount_amount, 0.0);
        // 100 + 12 + 10, fees on the same base
        assert_eq!(totals.total, 122.0);
    }

    #[test]
    fn test_fees_do_not_compound() {
        // (100 - 20) * (1 + 0.10 + 0.10) = 96, not 80 * 1.1 * 1.1 = 96.80
        let totals = compute_bill_totals(100.0, 0.20, 0.10, 0.10);
        assert_eq!(totals.total, 96.0);
    }

    #[test]
    fn test_full_discount() {
        let totals = compute_bill_totals(42.0, 1.0, 0.12, 0.05);
        assert_eq!(totals.discount_amount, 42.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn test_special_id_rate() {
        // 12% special-ID on $25.00, no tax or fee
        let totals = compute_bill_totals(25.0, 0.12, 0.0, 0.0);
        assert_eq!(totals.discount_amount, 3.0);
        assert_eq!(totals.total, 22.0);
    }

    #[test]
    fn test_lenient_rates_pass_through() {
        // Negative and >1 rates are accepted as-is
        let totals = compute_bill_totals(100.0, 0.0, -0.5, 0.0);
        assert_eq!(totals.total, 50.0);
        let totals = compute_bill_totals(100.0, 0.0, 1.5, 0.0);
        assert_eq!(totals.total, 250.0);
    }

    #[test]
    fn test_precision_third_discount() {
        // 33% on $100: discount $33.00, total $67.00 * 1.12 = $75.04
        let totals = compute_bill_totals(100.0, 0.33, 0.12, 0.0);
        assert_eq!(totals.discount_amount, 33.0);
        assert_eq!(totals.total, 75.04);
    }

    #[test]
    fn test_precision_rounding_half_up() {
        // 10.005 rounds to 10.01
        let totals = compute_bill_totals(10.005, 0.0, 0.0, 0.0);
        assert_eq!(totals.subtotal, 10.01);
    }

    // ========== Amortization ==========

    #[test]
    fn test_partial_then_paid() {
        let (balance, status) = amortize(25.20, 10.0);
        assert_eq!(balance, 15.20);
        assert_eq!(status, PaymentStatus::Partial);

        let (balance, status) = amortize(balance, 20.0);
        assert_eq!(balance, 0.0);
        assert_eq!(status, PaymentStatus::Paid);
    }

    #[test]
    fn test_exact_payment() {
        let (balance, status) = amortize(25.20, 25.20);
        assert_eq!(balance, 0.0);
        assert_eq!(status, PaymentStatus::Paid);
    }

    #[test]
    fn test_overpayment_floors_at_zero() {
        let (balance, status) = amortize(5.0, 100.0);
        assert_eq!(balance, 0.0);
        assert_eq!(status, PaymentStatus::Paid);
    }

    #[test]
    fn test_sequence_never_negative() {
        let mut balance = 100.0;
        for paid in [30.0, 30.0, 30.0, 30.0] {
            let (next, _) = amortize(balance, paid);
            assert!(next >= 0.0);
            assert!(next <= balance);
            balance = next;
        }
        assert_eq!(balance, 0.0);
    }

    #[test]
    fn test_paid_iff_sum_covers_total() {
        // 3 x 8.40 = 25.20 exactly
        let mut balance = 25.20;
        let mut status = PaymentStatus::Partial;
        for _ in 0..3 {
            let (next, s) = amortize(balance, 8.40);
            balance = next;
            status = s;
        }
        assert_eq!(balance, 0.0);
        assert_eq!(status, PaymentStatus::Paid);
    }

    #[test]
    fn test_small_amounts() {
        let (balance, status) = amortize(0.03, 0.01);
        assert_eq!(balance, 0.02);
        assert_eq!(status, PaymentStatus::Partial);
    }
}
