//! Food Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{require, require_len, require_object_id, require_positive};

/// A dish served from a menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Food {
    pub food_id: String,
    pub food_name: String,
    pub food_price: f64,
    pub food_description: String,
    pub food_image: String,
    pub menu_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create food request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFood {
    pub food_name: String,
    pub food_price: f64,
    pub food_description: String,
    pub food_image: String,
    pub menu_id: String,
}

/// Partial food update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodUpdate {
    pub food_name: Option<String>,
    pub food_price: Option<f64>,
    pub food_description: Option<String>,
    pub food_image: Option<String>,
    pub menu_id: Option<String>,
}

/// Truncate a price to two decimal places
pub fn truncate_price(price: f64) -> f64 {
    (price * 100.0).trunc() / 100.0
}

impl NewFood {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_len("food_name", self.food_name.trim(), 2, 50)?;
        require_positive("food_price", self.food_price)?;
        require("food_description", &self.food_description)?;
        require("food_image", &self.food_image)?;
        require_object_id("menu_id", &self.menu_id)
    }

    pub fn into_record(self, food_id: String, now: DateTime<Utc>) -> Food {
        Food {
            food_id,
            food_name: self.food_name.trim().to_string(),
            food_price: truncate_price(self.food_price),
            food_description: self.food_description,
            food_image: self.food_image,
            menu_id: self.menu_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl FoodUpdate {
    pub fn validate(&self) -> Result<(), SharedError> {
        if let Some(name) = &self.food_name {
            require_len("food_name", name.trim(), 2, 50)?;
        }
        if let Some(price) = self.food_price {
            require_positive("food_price", price)?;
        }
        if let Some(menu_id) = &self.menu_id {
            require_object_id("menu_id", menu_id)?;
        }
        Ok(())
    }
}
