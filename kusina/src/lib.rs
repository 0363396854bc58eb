//! Kusina, a restaurant POS admin core
//!
//! The engineered heart of the system is the billing & payment ledger:
//! discount resolution, bill generation, payment application and the
//! append-only member history journal. Presentation surfaces (forms,
//! routing, authentication) live outside this crate and consume [`ledger`]
//! through [`DbService`]'s pool.

pub mod config;
pub mod db;
pub mod ledger;
pub mod utils;

pub use config::Config;
pub use db::DbService;
pub use utils::{AppError, AppResult};
