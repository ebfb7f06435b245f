//! Menu Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{require, require_len};

/// A dated menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Menu {
    pub menu_id: String,
    pub name: String,
    pub category: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create menu request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMenu {
    pub name: String,
    #[serde(alias = "catagory")]
    pub category: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Partial menu update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuUpdate {
    pub name: Option<String>,
    #[serde(alias = "catagory")]
    pub category: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl NewMenu {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_len("name", self.name.trim(), 2, 50)?;
        require("category", &self.category)?;
        if self.end_date <= self.start_date {
            return Err(SharedError::validation(
                "end_date",
                "must be after start_date",
            ));
        }
        Ok(())
    }

    pub fn into_record(self, menu_id: String, now: DateTime<Utc>) -> Menu {
        Menu {
            menu_id,
            name: self.name.trim().to_string(),
            category: self.category,
            start_date: self.start_date,
            end_date: self.end_date,
            created_at: now,
            updated_at: now,
        }
    }
}

impl MenuUpdate {
    /// Dates may only move as a pair: the new span must start in the future
    /// and end after it starts.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), SharedError> {
        if let Some(name) = &self.name {
            require_len("name", name.trim(), 2, 50)?;
        }
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => {
                if start <= now || end <= start {
                    return Err(SharedError::validation(
                        "start_date",
                        "start date must be before end date and both must be in the future",
                    ));
                }
            }
            (None, None) => {}
            _ => {
                return Err(SharedError::validation(
                    "start_date",
                    "start_date and end_date must be supplied together",
                ));
            }
        }
        Ok(())
    }
}
