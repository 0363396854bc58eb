//! Dish Model

use serde::{Deserialize, Serialize};

/// Menu dish. Prices are read live at bill-generation time; line items do
/// not snapshot them.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub price: f64,
}
