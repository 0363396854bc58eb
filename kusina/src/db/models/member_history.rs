//! Member History Models
//!
//! The journal is append-only: entries are never updated or deleted, and
//! carry raw order/payment ids so they outlive their referents.

use serde::{Deserialize, Serialize};

/// Journal row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HistoryEntry {
    pub id: i64,
    pub member_id: String,
    pub event_type: String,
    pub order_id: Option<i64>,
    pub payment_id: Option<i64>,
    /// Unix millis
    pub event_at: i64,
}

/// Journal event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryEventType {
    Order,
    Payment,
}

impl HistoryEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryEventType::Order => "order",
            HistoryEventType::Payment => "payment",
        }
    }
}

/// Event reference appended to the journal; exactly one referent per entry
#[derive(Debug, Clone, Copy)]
pub enum HistoryEvent {
    Order(i64),
    Payment(i64),
}

impl HistoryEvent {
    pub fn event_type(&self) -> HistoryEventType {
        match self {
            HistoryEvent::Order(_) => HistoryEventType::Order,
            HistoryEvent::Payment(_) => HistoryEventType::Payment,
        }
    }
}

/// Journal entry with its human-readable description resolved at read time
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntryDetail {
    #[serde(flatten)]
    pub entry: HistoryEntry,
    pub description: String,
}

/// Dish name with total ordered quantity (analytics)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DishCount {
    pub name: String,
    pub total_quantity: i64,
}

/// Per-member analytics derived from orders, bills and payments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberAnalytics {
    pub total_orders: i64,
    /// Top 5 dishes by total ordered quantity
    pub most_ordered_dishes: Vec<DishCount>,
    pub full_payments: i64,
    pub partial_payments: i64,
    pub total_payments: i64,
    pub average_bill_total: f64,
    pub highest_bill_total: f64,
    pub lowest_bill_total: f64,
}
