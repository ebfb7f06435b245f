//! Order Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{require, require_object_id};

/// An order placed at a table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub table_id: String,
    pub order_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    #[serde(default)]
    pub table_id: String,
    pub order_status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub table_id: Option<String>,
    pub order_status: Option<String>,
}

impl NewOrder {
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.table_id.is_empty() {
            return Err(SharedError::validation("table_id", "Table ID is required"));
        }
        require_object_id("table_id", &self.table_id)?;
        require("order_status", &self.order_status)
    }

    pub fn into_record(self, order_id: String, now: DateTime<Utc>) -> Order {
        Order {
            order_id,
            table_id: self.table_id,
            order_status: self.order_status,
            created_at: now,
            updated_at: now,
        }
    }
}

impl OrderUpdate {
    pub fn validate(&self) -> Result<(), SharedError> {
        if let Some(table_id) = &self.table_id {
            require_object_id("table_id", table_id)?;
        }
        if let Some(status) = &self.order_status {
            require("order_status", status)?;
        }
        Ok(())
    }
}
