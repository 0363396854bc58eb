//! Bill Model

use serde::{Deserialize, Serialize};

use super::discount::SpecialIdCreate;

/// Bill entity
///
/// `total` is computed once at generation and never changes;
/// `outstanding_balance` starts equal to `total` and only ever decreases,
/// floored at zero. Invariant: `0 <= outstanding_balance <= total`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bill {
    pub id: i64,
    pub discount_id: Option<i64>,
    pub tax_rate: f64,
    pub service_fee_rate: f64,
    pub total: f64,
    pub outstanding_balance: f64,
}

/// Discount selection on the billing form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountSelection {
    /// No discount applied
    None,
    /// An existing catalog discount, by id
    Existing(i64),
    /// Create a Senior/PWD discount on the fly and apply it
    NewSpecialId(SpecialIdCreate),
}

/// Bill generation payload
///
/// Tax and service-fee rates are accepted as-is; this layer does not bound
/// them to [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateBill {
    pub order_id: i64,
    pub discount: DiscountSelection,
    pub tax_rate: f64,
    pub service_fee_rate: f64,
}
