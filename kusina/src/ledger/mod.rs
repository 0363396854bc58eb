//! Billing & Payment Ledger
//!
//! The engineered core of the admin tool: discount resolution, bill
//! generation, payment amortization and the append-only member history
//! journal. Each mutating operation is a bounded sequence of store calls on
//! one transaction.

pub mod billing;
pub mod calculator;
pub mod discounts;
pub mod history;
pub mod orders;
pub mod payments;

pub use billing::{delete_bill, generate_bill, list_bills};
pub use calculator::{amortize, compute_bill_totals, order_subtotal, BillTotals};
pub use discounts::{
    create_in_house, create_special_id, delete_discount, list_catalog, rate_for,
};
pub use history::{analytics_for, history_detail_for, history_for};
pub use orders::{delete_order, list_unbilled_orders, place_order};
pub use payments::{apply_payment, list_open_bills, payments_for_bill};
