//! Pagination types
//!
//! `PageQuery` is the raw query string of a listing request. It resolves into
//! a `PageWindow` (where to slice, how many) which the store turns into a
//! single aggregation round trip returning a `Page`.
//!
//! # Resolution rules
//!
//! - `page` defaults to 1, `page_size` to 10. Unparseable or non-positive
//!   values fall back to the default.
//! - `start_index = (page - 1) * page_size`, unless an explicit `start_index`
//!   parses, in which case it wins outright, negative values included.
//! - Both values are clamped to the 32-bit range accepted by `$slice`.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Raw pagination query parameters
///
/// Values are kept as strings so that garbage input falls back to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    #[serde(alias = "recordPerPage")]
    pub page_size: Option<String>,
    #[serde(alias = "startIndex")]
    pub start_index: Option<String>,
}

/// A resolved slice of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start_index: i64,
    pub page_size: i64,
}

impl PageQuery {
    pub fn window(&self) -> PageWindow {
        let page = positive_or(self.page.as_deref(), DEFAULT_PAGE);
        let page_size = positive_or(self.page_size.as_deref(), DEFAULT_PAGE_SIZE);

        let start_index = self
            .start_index
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or_else(|| (page - 1).saturating_mul(page_size));

        PageWindow {
            start_index: start_index.clamp(i32::MIN.into(), i32::MAX.into()),
            page_size: page_size.min(i32::MAX.into()),
        }
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        PageQuery::default().window()
    }
}

fn positive_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// One page of records plus the size of the whole matched set
///
/// Serializes as `{ "total_count": n, "<items_field>": [...] }` so each
/// resource keeps its own item key (`food_items`, `order_items`).
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub total_count: u64,
    pub items_field: &'static str,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn empty(items_field: &'static str) -> Self {
        Self {
            total_count: 0,
            items_field,
            items: Vec::new(),
        }
    }

    /// Convert every item, failing on the first error
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            total_count: self.total_count,
            items_field: self.items_field,
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
        })
    }
}

impl<T: Serialize> Serialize for Page<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("total_count", &self.total_count)?;
        map.serialize_entry(self.items_field, &self.items)?;
        map.end()
    }
}
