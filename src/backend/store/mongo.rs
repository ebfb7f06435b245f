//! MongoDB collection
//!
//! Thin adapter from the `Collection` trait onto the official driver.
//! Duplicate-key write errors (code 11000) surface as
//! `StoreError::Duplicate`.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Bson, Document};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

use super::pipeline::{paginate_pipeline, read_page};
use super::{Collection, InsertAck, MergePatch, StoreError, UpdateAck};
use crate::shared::pagination::{Page, PageWindow};

const DUPLICATE_KEY: i32 = 11000;

pub struct MongoCollection {
    inner: mongodb::Collection<Document>,
}

impl MongoCollection {
    pub fn new(db: &mongodb::Database, name: &str) -> Self {
        Self {
            inner: db.collection::<Document>(name),
        }
    }

    /// Create an ascending unique index on each of `fields`
    pub async fn ensure_unique(&self, fields: &[&str]) -> Result<(), StoreError> {
        for field in fields {
            let mut keys = Document::new();
            keys.insert(*field, 1);
            let index = IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().unique(true).build())
                .build();
            self.inner.create_index(index).await?;
            tracing::info!("Unique index on {}.{} ensured", self.inner.name(), field);
        }
        Ok(())
    }
}

/// Field named in a duplicate-key message such as
/// `E11000 ... index: email_1 dup key: { email: "a@b.c" }`
fn duplicate_field(message: &str) -> String {
    message
        .split_once("dup key: {")
        .and_then(|(_, rest)| rest.split_once(':'))
        .map(|(field, _)| field.trim().trim_matches('"').to_string())
        .filter(|field| !field.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

impl From<MongoError> for StoreError {
    fn from(err: MongoError) -> Self {
        if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = err.kind.as_ref() {
            if write_error.code == DUPLICATE_KEY {
                return StoreError::Duplicate {
                    field: duplicate_field(&write_error.message),
                };
            }
        }
        StoreError::Database(err.to_string())
    }
}

fn id_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl Collection for MongoCollection {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn insert_one(&self, document: Document) -> Result<InsertAck, StoreError> {
        let result = self.inner.insert_one(document).await?;
        Ok(InsertAck {
            inserted_id: id_string(&result.inserted_id),
        })
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Document>, StoreError> {
        Ok(self.inner.find_one(filter).await?)
    }

    async fn find(&self, filter: Document) -> Result<Vec<Document>, StoreError> {
        let cursor = self.inner.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count(&self, filter: Document) -> Result<u64, StoreError> {
        Ok(self.inner.count_documents(filter).await?)
    }

    async fn update_one(
        &self,
        filter: Document,
        patch: MergePatch,
        upsert: bool,
    ) -> Result<UpdateAck, StoreError> {
        let result = self
            .inner
            .update_one(filter, patch.into_document())
            .upsert(upsert)
            .await?;
        Ok(UpdateAck {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.as_ref().map(id_string),
        })
    }

    async fn delete_one(&self, filter: Document) -> Result<u64, StoreError> {
        Ok(self.inner.delete_one(filter).await?.deleted_count)
    }

    async fn paginate(
        &self,
        filter: Document,
        window: PageWindow,
        items_field: &'static str,
    ) -> Result<Page<Document>, StoreError> {
        let pipeline = paginate_pipeline(filter, window, items_field);
        let mut cursor = self.inner.aggregate(pipeline).await?;
        let first = cursor.try_next().await?;
        Ok(read_page(first, items_field)?)
    }
}
