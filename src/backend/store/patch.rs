//! Merge-patch builder
//!
//! Accumulates `(field, value)` pairs for the fields a client actually sent
//! and renders them as a single `$set` update document.

use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson::{doc, Bson, Document};

/// Render a timestamp the way serde stores `DateTime<Utc>` fields
pub fn timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergePatch {
    fields: Document,
}

impl MergePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.fields.insert(field, value.into());
        self
    }

    /// Set the field only when a value is present
    pub fn set_opt<V: Into<Bson>>(self, field: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(field, value),
            None => self,
        }
    }

    /// Stamp `updated_at`
    pub fn touch(self, now: DateTime<Utc>) -> Self {
        self.set("updated_at", timestamp(now))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The accumulated `field -> value` pairs
    pub fn fields(&self) -> &Document {
        &self.fields
    }

    pub fn into_document(self) -> Document {
        doc! { "$set": self.fields }
    }
}
