//! Member Model

use serde::{Deserialize, Serialize};

/// Member entity
///
/// Created by the out-of-scope member management surface; the ledger only
/// reads it. The id is a 12-digit numeric string, treated as opaque here.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub contact_number: Option<String>,
}
