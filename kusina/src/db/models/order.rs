//! Order Models

use serde::{Deserialize, Serialize};

/// Order entity. `bill_id` stays null until the order is billed; one order
/// maps to at most one bill.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub member_id: String,
    pub bill_id: Option<i64>,
    pub order_date: String,
}

/// Line item owned by exactly one order
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderLineItem {
    pub order_id: i64,
    pub dish_id: i64,
    pub quantity: i64,
}

/// Line item joined with its dish's current unit price
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PricedLineItem {
    pub price: f64,
    pub quantity: i64,
}

/// Place-order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrder {
    pub member_id: String,
    pub items: Vec<OrderItemInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub dish_id: i64,
    pub quantity: i64,
}
