//! Data Models
//!
//! Row structs and API payload types for the ledger's collections.

pub mod bill;
pub mod discount;
pub mod dish;
pub mod member;
pub mod member_history;
pub mod order;
pub mod payment;

pub use bill::{Bill, DiscountSelection, GenerateBill};
pub use discount::{
    Discount, DiscountRow, InHouseCreate, InHouseRow, PwdRow, SeniorRow, SpecialIdCreate,
    SpecialIdDetail, SpecialIdRow, SpecialIdSubtype, SPECIAL_ID_RATE,
};
pub use dish::Dish;
pub use member::Member;
pub use member_history::{
    DishCount, HistoryEntry, HistoryEntryDetail, HistoryEvent, HistoryEventType, MemberAnalytics,
};
pub use order::{Order, OrderItemInput, OrderLineItem, PlaceOrder, PricedLineItem};
pub use payment::{ApplyPayment, Payment, PaymentMethod, PaymentStatus};
