//! Invoice Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{require, require_object_id};

/// Payment record for an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub invoice_id: String,
    pub order_id: String,
    pub payment_method: String,
    pub payment_status: String,
    pub payment_due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvoice {
    pub order_id: String,
    pub payment_method: String,
    pub payment_status: String,
    pub payment_due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceUpdate {
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    pub payment_due_date: Option<DateTime<Utc>>,
}

impl NewInvoice {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_object_id("order_id", &self.order_id)?;
        require("payment_method", &self.payment_method)?;
        require("payment_status", &self.payment_status)
    }

    pub fn into_record(self, invoice_id: String, now: DateTime<Utc>) -> Invoice {
        Invoice {
            invoice_id,
            order_id: self.order_id,
            payment_method: self.payment_method,
            payment_status: self.payment_status,
            payment_due_date: self.payment_due_date,
            created_at: now,
            updated_at: now,
        }
    }
}

impl InvoiceUpdate {
    pub fn validate(&self) -> Result<(), SharedError> {
        if let Some(method) = &self.payment_method {
            require("payment_method", method)?;
        }
        if let Some(status) = &self.payment_status {
            require("payment_status", status)?;
        }
        Ok(())
    }
}
