//! Dining Table Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Dining table entity
///
/// `reservation_id` is set while a party is seated at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub table_id: i64,
    pub table_name: String,
    pub capacity: i32,
    pub reservation_id: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DiningTable {
    pub fn is_occupied(&self) -> bool {
        self.reservation_id.is_some()
    }
}

/// Create dining table payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub table_name: String,
    pub capacity: i32,
}
