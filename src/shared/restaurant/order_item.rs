//! Order Item Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{require_object_id, require_positive};

/// One line of an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub order_item_id: String,
    pub order_id: String,
    pub menu_id: String,
    pub food_id: String,
    pub quantity: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub order_id: String,
    pub menu_id: String,
    pub food_id: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderItemUpdate {
    pub quantity: Option<i32>,
    pub price: Option<f64>,
    pub food_id: Option<String>,
}

impl NewOrderItem {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_object_id("order_id", &self.order_id)?;
        require_object_id("menu_id", &self.menu_id)?;
        require_object_id("food_id", &self.food_id)?;
        require_positive("quantity", self.quantity)?;
        require_positive("price", self.price)
    }

    pub fn into_record(self, order_item_id: String, now: DateTime<Utc>) -> OrderItem {
        OrderItem {
            order_item_id,
            order_id: self.order_id,
            menu_id: self.menu_id,
            food_id: self.food_id,
            quantity: self.quantity,
            price: self.price,
            created_at: now,
            updated_at: now,
        }
    }
}

impl OrderItemUpdate {
    pub fn validate(&self) -> Result<(), SharedError> {
        if let Some(quantity) = self.quantity {
            require_positive("quantity", quantity)?;
        }
        if let Some(price) = self.price {
            require_positive("price", price)?;
        }
        if let Some(food_id) = &self.food_id {
            require_object_id("food_id", food_id)?;
        }
        Ok(())
    }
}
