//! Payment Models

use serde::{Deserialize, Serialize};

/// Payment record
///
/// Immutable once written. `outstanding_balance` is the balance snapshot
/// immediately after this payment, not a live view of the bill's field.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Payment {
    pub id: i64,
    pub member_id: String,
    pub bill_id: i64,
    pub method: String,
    pub payment_date: String,
    pub paid_amount: f64,
    pub status: String,
    pub outstanding_balance: f64,
}

/// Accepted payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Cash,
    Card,
    EWallet,
    Points,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::EWallet => "e-wallet",
            PaymentMethod::Points => "points",
        }
    }
}

/// Derived payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Partial,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Partial => "partial",
            PaymentStatus::Paid => "paid",
        }
    }
}

/// Apply-payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyPayment {
    pub member_id: String,
    pub bill_id: i64,
    pub method: PaymentMethod,
    /// YYYY-MM-DD
    pub payment_date: String,
    pub paid_amount: f64,
}
