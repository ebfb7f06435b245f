//! Table Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{require, require_positive};

/// A dining table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Table {
    pub table_id: String,
    pub table_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_guests: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTable {
    pub table_name: String,
    #[serde(default)]
    pub number_of_guests: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableUpdate {
    pub table_name: Option<String>,
    pub number_of_guests: Option<i32>,
}

fn validate_guests(guests: Option<i32>) -> Result<(), SharedError> {
    match guests {
        Some(n) => require_positive("number_of_guests", n),
        None => Ok(()),
    }
}

impl NewTable {
    pub fn validate(&self) -> Result<(), SharedError> {
        require("table_name", &self.table_name)?;
        validate_guests(self.number_of_guests)
    }

    pub fn into_record(self, table_id: String, now: DateTime<Utc>) -> Table {
        Table {
            table_id,
            table_name: self.table_name,
            number_of_guests: self.number_of_guests,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TableUpdate {
    pub fn validate(&self) -> Result<(), SharedError> {
        if let Some(name) = &self.table_name {
            require("table_name", name)?;
        }
        validate_guests(self.number_of_guests)
    }
}
