//! Document Store Module
//!
//! Every handler talks to its collection through the `Collection` trait, so
//! the same code runs against MongoDB in production and against an in-memory
//! collection in tests or when no database is configured.
//!
//! # Architecture
//!
//! - **`patch`** - `MergePatch` builder for partial `$set` updates
//! - **`pipeline`** - Aggregation pipeline used for paginated listings
//! - **`memory`** - Lock-protected in-memory collection
//! - **`mongo`** - MongoDB driver backed collection
//!
//! # Collections
//!
//! | Name          | Unique fields      |
//! |---------------|--------------------|
//! | `user`        | `email`, `phone`   |
//! | `food`        |                    |
//! | `menu`        |                    |
//! | `table`       |                    |
//! | `order`       |                    |
//! | `order_items` |                    |
//! | `invoices`    |                    |

pub mod memory;
pub mod mongo;
pub mod patch;
pub mod pipeline;

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, Document};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::error::SharedError;
use crate::shared::pagination::{Page, PageWindow};

pub use memory::MemoryCollection;
pub use mongo::MongoCollection;
pub use patch::MergePatch;

pub const USERS: &str = "user";
pub const FOODS: &str = "food";
pub const MENUS: &str = "menu";
pub const TABLES: &str = "table";
pub const ORDERS: &str = "order";
pub const ORDER_ITEMS: &str = "order_items";
pub const INVOICES: &str = "invoices";

/// Fields that must be unique across the user collection
pub const USER_UNIQUE_FIELDS: [&str; 2] = ["email", "phone"];

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique index rejected the write
    #[error("duplicate value for unique field '{field}'")]
    Duplicate { field: String },

    /// Driver or connection failure
    #[error("database error: {0}")]
    Database(String),

    /// A document could not be converted to or from a record
    #[error(transparent)]
    Codec(#[from] SharedError),
}

/// Acknowledgement of an insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertAck {
    pub inserted_id: String,
}

/// Acknowledgement of an update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateAck {
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

/// A named collection of documents
///
/// Filters are equality matches on top-level fields; an empty filter matches
/// every document.
#[async_trait]
pub trait Collection: Send + Sync {
    /// Collection name
    fn name(&self) -> &str;

    async fn insert_one(&self, document: Document) -> Result<InsertAck, StoreError>;

    async fn find_one(&self, filter: Document) -> Result<Option<Document>, StoreError>;

    async fn find(&self, filter: Document) -> Result<Vec<Document>, StoreError>;

    async fn count(&self, filter: Document) -> Result<u64, StoreError>;

    /// Apply `patch` to the first matching document
    ///
    /// With `upsert`, a missing document is created from the filter fields
    /// plus the patched fields.
    async fn update_one(
        &self,
        filter: Document,
        patch: MergePatch,
        upsert: bool,
    ) -> Result<UpdateAck, StoreError>;

    /// Delete the first matching document, returning the deleted count
    async fn delete_one(&self, filter: Document) -> Result<u64, StoreError>;

    /// One page of matching documents plus the total match count
    async fn paginate(
        &self,
        filter: Document,
        window: PageWindow,
        items_field: &'static str,
    ) -> Result<Page<Document>, StoreError>;
}

/// Shared handle to a collection
pub type CollectionRef = Arc<dyn Collection>;

/// The restaurant collections, built once at startup
#[derive(Clone)]
pub struct Collections {
    pub users: CollectionRef,
    pub foods: CollectionRef,
    pub menus: CollectionRef,
    pub tables: CollectionRef,
    pub orders: CollectionRef,
    pub order_items: CollectionRef,
    pub invoices: CollectionRef,
}

impl Collections {
    /// In-memory collections with the user uniqueness rules applied
    pub fn memory() -> Self {
        let plain = |name: &str| -> CollectionRef { Arc::new(MemoryCollection::new(name)) };
        Self {
            users: Arc::new(MemoryCollection::with_unique(USERS, &USER_UNIQUE_FIELDS)),
            foods: plain(FOODS),
            menus: plain(MENUS),
            tables: plain(TABLES),
            orders: plain(ORDERS),
            order_items: plain(ORDER_ITEMS),
            invoices: plain(INVOICES),
        }
    }

    /// Collections of a MongoDB database
    pub fn mongo(db: &mongodb::Database) -> Self {
        let coll = |name: &str| -> CollectionRef { Arc::new(MongoCollection::new(db, name)) };
        Self {
            users: coll(USERS),
            foods: coll(FOODS),
            menus: coll(MENUS),
            tables: coll(TABLES),
            orders: coll(ORDERS),
            order_items: coll(ORDER_ITEMS),
            invoices: coll(INVOICES),
        }
    }
}

/// Equality filter on a single field
pub fn field_eq(field: &str, value: &str) -> Document {
    let mut filter = Document::new();
    filter.insert(field, value);
    filter
}

/// Serialize a record into a document
pub fn encode<T: Serialize>(record: &T) -> Result<Document, SharedError> {
    Ok(bson::to_document(record)?)
}

/// Deserialize a document into a record; unknown fields such as `_id` are ignored
pub fn decode<T: DeserializeOwned>(document: Document) -> Result<T, SharedError> {
    Ok(bson::from_document(document)?)
}

/// Insert a typed record whose `_id` is the object id behind its public `id`
///
/// The acknowledgement then carries the same id the record is addressed by.
pub async fn insert_keyed<T: Serialize>(
    collection: &dyn Collection,
    id: &str,
    record: &T,
) -> Result<InsertAck, StoreError> {
    let object_id = ObjectId::parse_str(id)
        .map_err(|e| SharedError::serialization(format!("invalid object id '{}': {}", id, e)))?;
    let mut document = encode(record)?;
    document.insert("_id", object_id);
    collection.insert_one(document).await
}

/// Find a typed record
pub async fn find_one<T: DeserializeOwned>(
    collection: &dyn Collection,
    filter: Document,
) -> Result<Option<T>, StoreError> {
    match collection.find_one(filter).await? {
        Some(document) => Ok(Some(decode(document)?)),
        None => Ok(None),
    }
}

/// Find all matching typed records
pub async fn find_all<T: DeserializeOwned>(
    collection: &dyn Collection,
    filter: Document,
) -> Result<Vec<T>, StoreError> {
    let documents = collection.find(filter).await?;
    let records = documents
        .into_iter()
        .map(decode)
        .collect::<Result<Vec<T>, _>>()?;
    Ok(records)
}

/// Whether any document matches
pub async fn exists(collection: &dyn Collection, filter: Document) -> Result<bool, StoreError> {
    Ok(collection.count(filter).await? > 0)
}

/// Paginate and decode into typed records
pub async fn paginate<T: DeserializeOwned>(
    collection: &dyn Collection,
    filter: Document,
    window: PageWindow,
    items_field: &'static str,
) -> Result<Page<T>, StoreError> {
    let page = collection.paginate(filter, window, items_field).await?;
    Ok(page.try_map(decode)?)
}
