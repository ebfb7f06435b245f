//! In-memory collection
//!
//! Ordered document list behind a `tokio::sync::RwLock`. Mirrors the subset
//! of MongoDB behaviour the handlers rely on: equality filters, `$set`
//! updates with upsert, unique fields, and `$slice` windowing.

use std::ops::Range;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use super::pipeline::read_page;
use super::{Collection, InsertAck, MergePatch, StoreError, UpdateAck};
use crate::shared::pagination::{Page, PageWindow};

pub struct MemoryCollection {
    name: String,
    unique: Vec<String>,
    documents: RwLock<Vec<Document>>,
}

impl MemoryCollection {
    pub fn new(name: &str) -> Self {
        Self::with_unique(name, &[])
    }

    /// A collection that rejects duplicate values for `unique` fields
    pub fn with_unique(name: &str, unique: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            unique: unique.iter().map(|f| f.to_string()).collect(),
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// First unique field `candidate` would collide on, skipping the document at `skip`
    fn conflict(&self, documents: &[Document], candidate: &Document, skip: Option<usize>) -> Option<String> {
        self.unique
            .iter()
            .find(|field| {
                let Some(value) = candidate.get(field.as_str()).filter(|v| **v != Bson::Null) else {
                    return false;
                };
                documents
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| Some(*i) != skip)
                    .any(|(_, doc)| doc.get(field.as_str()) == Some(value))
            })
            .cloned()
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

fn set_fields(document: &mut Document, patch: &MergePatch) -> bool {
    let mut modified = false;
    for (key, value) in patch.fields() {
        if document.get(key) != Some(value) {
            document.insert(key.clone(), value.clone());
            modified = true;
        }
    }
    modified
}

/// Window of a `len`-element array selected by `$slice: [array, start, size]`
///
/// A negative `start` counts from the end and clamps at the beginning.
pub fn slice_bounds(len: usize, start: i64, size: i64) -> Range<usize> {
    let begin = if start >= 0 {
        usize::try_from(start).unwrap_or(usize::MAX).min(len)
    } else {
        let from_end = usize::try_from(start.unsigned_abs()).unwrap_or(usize::MAX);
        len.saturating_sub(from_end)
    };
    let size = usize::try_from(size.max(0)).unwrap_or(usize::MAX);
    begin..begin.saturating_add(size).min(len)
}

#[async_trait]
impl Collection for MemoryCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert_one(&self, mut document: Document) -> Result<InsertAck, StoreError> {
        let mut documents = self.documents.write().await;
        if let Some(field) = self.conflict(&documents, &document, None) {
            return Err(StoreError::Duplicate { field });
        }

        let id = match document.get("_id") {
            Some(Bson::ObjectId(id)) => *id,
            _ => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };
        documents.push(document);
        Ok(InsertAck {
            inserted_id: id.to_hex(),
        })
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Document>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| matches(d, &filter)).cloned())
    }

    async fn find(&self, filter: Document) -> Result<Vec<Document>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|d| matches(d, &filter))
            .cloned()
            .collect())
    }

    async fn count(&self, filter: Document) -> Result<u64, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().filter(|d| matches(d, &filter)).count() as u64)
    }

    async fn update_one(
        &self,
        filter: Document,
        patch: MergePatch,
        upsert: bool,
    ) -> Result<UpdateAck, StoreError> {
        let mut documents = self.documents.write().await;

        if let Some(index) = documents.iter().position(|d| matches(d, &filter)) {
            let mut updated = documents[index].clone();
            let modified = set_fields(&mut updated, &patch);
            if let Some(field) = self.conflict(&documents, &updated, Some(index)) {
                return Err(StoreError::Duplicate { field });
            }
            documents[index] = updated;
            return Ok(UpdateAck {
                matched_count: 1,
                modified_count: u64::from(modified),
                upserted_id: None,
            });
        }

        if !upsert {
            return Ok(UpdateAck {
                matched_count: 0,
                modified_count: 0,
                upserted_id: None,
            });
        }

        let id = ObjectId::new();
        let mut created = filter;
        set_fields(&mut created, &patch);
        created.insert("_id", id);
        if let Some(field) = self.conflict(&documents, &created, None) {
            return Err(StoreError::Duplicate { field });
        }
        documents.push(created);
        Ok(UpdateAck {
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id.to_hex()),
        })
    }

    async fn delete_one(&self, filter: Document) -> Result<u64, StoreError> {
        let mut documents = self.documents.write().await;
        match documents.iter().position(|d| matches(d, &filter)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn paginate(
        &self,
        filter: Document,
        window: PageWindow,
        items_field: &'static str,
    ) -> Result<Page<Document>, StoreError> {
        let matched = self.find(filter).await?;
        if matched.is_empty() {
            return Ok(read_page(None, items_field)?);
        }

        let range = slice_bounds(matched.len(), window.start_index, window.page_size);
        Ok(Page {
            total_count: matched.len() as u64,
            items_field,
            items: matched[range].to_vec(),
        })
    }
}
