//! Paginated listing pipeline
//!
//! One aggregation returns the page and the total count:
//!
//! ```text
//! $match   { <filter> }
//! $group   { _id: null, total_count: { $sum: 1 }, data: { $push: "$$ROOT" } }
//! $project { _id: 0, total_count: 1, <items_field>: { $slice: ["$data", start, size] } }
//! ```
//!
//! An empty match makes `$group` emit nothing, which callers read as an
//! empty page.

use mongodb::bson::{doc, Bson, Document};

use crate::shared::error::SharedError;
use crate::shared::pagination::{Page, PageWindow};

pub fn paginate_pipeline(
    filter: Document,
    window: PageWindow,
    items_field: &str,
) -> Vec<Document> {
    let mut projection = doc! { "_id": 0, "total_count": 1 };
    projection.insert(
        items_field,
        doc! { "$slice": ["$data", to_i32(window.start_index), to_i32(window.page_size)] },
    );

    vec![
        doc! { "$match": filter },
        doc! {
            "$group": {
                "_id": Bson::Null,
                "total_count": { "$sum": 1 },
                "data": { "$push": "$$ROOT" },
            }
        },
        doc! { "$project": projection },
    ]
}

/// `$slice` only takes 32-bit arguments
fn to_i32(value: i64) -> i32 {
    let clamped = value.clamp(i32::MIN.into(), i32::MAX.into());
    i32::try_from(clamped).unwrap_or_default()
}

/// Read the first pipeline result into a page
pub fn read_page(
    result: Option<Document>,
    items_field: &'static str,
) -> Result<Page<Document>, SharedError> {
    let Some(result) = result else {
        return Ok(Page::empty(items_field));
    };

    let total_count = match result.get("total_count") {
        Some(Bson::Int32(n)) => *n as u64,
        Some(Bson::Int64(n)) => *n as u64,
        Some(Bson::Double(n)) => *n as u64,
        _ => return Err(SharedError::serialization("page result has no total_count")),
    };

    let items = match result.get(items_field) {
        Some(Bson::Array(items)) => items
            .iter()
            .map(|item| match item {
                Bson::Document(doc) => Ok(doc.clone()),
                other => Err(SharedError::serialization(format!(
                    "page item is not a document: {}",
                    other
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
        Some(other) => {
            return Err(SharedError::serialization(format!(
                "{} is not an array: {}",
                items_field, other
            )))
        }
    };

    Ok(Page {
        total_count,
        items_field,
        items,
    })
}
