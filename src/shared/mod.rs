//! Shared Module
//!
//! Store-independent types used by the backend handlers and by tests:
//! configuration, request validation, pagination and the restaurant entity
//! models.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Pagination query and page types
pub mod pagination;

/// Field validation helpers
pub mod validation;

/// Restaurant entity models
pub mod restaurant;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use pagination::{Page, PageQuery, PageWindow};
