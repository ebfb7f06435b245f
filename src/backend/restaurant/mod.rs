//! Restaurant Resource Handlers
//!
//! CRUD over the restaurant collections. Every route here sits behind the
//! token gate. Handlers share one shape: decode and validate the request,
//! check referenced records exist, run one store operation, return JSON.
//!
//! | Resource    | Collection    | Listing                          |
//! |-------------|---------------|----------------------------------|
//! | foods       | `food`        | paginated under `food_items`     |
//! | menus       | `menu`        | full list                        |
//! | tables      | `table`       | full list                        |
//! | orders      | `order`       | full list                        |
//! | order items | `order_items` | paginated under `order_items`    |
//! | invoices    | `invoices`    | full list                        |

pub mod foods;
pub mod invoices;
pub mod menus;
pub mod order_items;
pub mod orders;
pub mod tables;

use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::backend::error::BackendError;
use crate::backend::store::{self, Collection, UpdateAck};

/// Body returned by delete handlers
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Deleted {
    pub message: String,
}

impl Deleted {
    pub fn new(what: &str) -> Self {
        Self {
            message: format!("{} deleted successfully", what),
        }
    }
}

/// Fresh public id
pub(crate) fn new_id() -> String {
    ObjectId::new().to_hex()
}

/// 404 with `message` unless a document with `field == id` exists
pub(crate) async fn ensure_exists(
    collection: &dyn Collection,
    field: &str,
    id: &str,
    message: &str,
) -> Result<(), BackendError> {
    if store::exists(collection, store::field_eq(field, id)).await? {
        Ok(())
    } else {
        tracing::warn!("{} {} does not exist in {}", field, id, collection.name());
        Err(BackendError::not_found(message))
    }
}

/// 404 when an update matched nothing
pub(crate) fn require_matched(ack: UpdateAck, message: &str) -> Result<UpdateAck, BackendError> {
    if ack.matched_count == 0 {
        return Err(BackendError::not_found(message));
    }
    Ok(ack)
}

/// 404 when a delete removed nothing
pub(crate) fn require_deleted(deleted: u64, message: &str) -> Result<(), BackendError> {
    if deleted == 0 {
        return Err(BackendError::not_found(message));
    }
    Ok(())
}
