//! Discount Models
//!
//! Discounts span four tables keyed by a shared discount id: a dispatch row
//! in `discount` plus either an `inhouse_discount` row or a
//! `specialid_discount` row with its `senior_detail`/`pwd_detail` sub-record.
//! The resolver merges them once at read time into the tagged [`Discount`]
//! union; rows are never mutated after creation.

use serde::{Deserialize, Serialize};

/// Fixed statutory rate for Senior/PWD special-ID discounts
pub const SPECIAL_ID_RATE: f64 = 0.12;

/// Type code stored in the `discount` dispatch table
pub const DISCOUNT_TYPE_INHOUSE: &str = "I";
pub const DISCOUNT_TYPE_SPECIAL_ID: &str = "S";

// =============================================================================
// Raw rows
// =============================================================================

/// Dispatch row of the `discount` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DiscountRow {
    pub id: i64,
    pub discount_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InHouseRow {
    pub discount_id: i64,
    pub description: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SpecialIdRow {
    pub discount_id: i64,
    pub member_id: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SeniorRow {
    pub discount_id: i64,
    pub id_number: String,
    pub birthdate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PwdRow {
    pub discount_id: i64,
    pub id_number: String,
    pub disability: String,
}

// =============================================================================
// Resolved catalog entries
// =============================================================================

/// Resolved discount, tagged by kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discount {
    InHouse {
        id: i64,
        description: String,
        rate: f64,
    },
    SpecialId {
        id: i64,
        member_id: String,
        detail: SpecialIdDetail,
    },
}

/// Senior/PWD eligibility evidence attached to a special-ID discount
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "subtype", rename_all = "snake_case")]
pub enum SpecialIdDetail {
    Senior { id_number: String, birthdate: String },
    Pwd { id_number: String, disability: String },
}

impl Discount {
    pub fn id(&self) -> i64 {
        match self {
            Discount::InHouse { id, .. } => *id,
            Discount::SpecialId { id, .. } => *id,
        }
    }

    /// Applicable flat rate. Special-ID discounts always carry the fixed 12%
    /// regardless of subtype.
    pub fn rate(&self) -> f64 {
        match self {
            Discount::InHouse { rate, .. } => *rate,
            Discount::SpecialId { .. } => SPECIAL_ID_RATE,
        }
    }
}

// =============================================================================
// Create payloads
// =============================================================================

/// Special-ID subtype selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialIdSubtype {
    Senior,
    Pwd,
}

impl SpecialIdSubtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialIdSubtype::Senior => "senior",
            SpecialIdSubtype::Pwd => "pwd",
        }
    }
}

/// Create payload: in-house flat-rate discount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InHouseCreate {
    pub description: String,
    /// Flat rate in [0, 1]
    pub rate: f64,
}

/// Create payload: Senior/PWD special-ID discount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialIdCreate {
    pub member_id: String,
    pub subtype: SpecialIdSubtype,
    pub id_number: String,
    /// Required for Senior
    pub birthdate: Option<String>,
    /// Required for PWD
    pub disability: Option<String>,
}
