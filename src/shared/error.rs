//! Shared Error Types
//!
//! Error types raised while decoding and validating request payloads, before
//! any handler touches the store.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON / BSON conversion failures
//! - `ValidationError` - A field failed a structural check
//!
//! # Usage
//!
//! ```rust
//! use resto_api::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "invalid email format");
//! ```
use thiserror::Error;

/// Errors produced while turning request payloads into domain values
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// Payload could not be converted
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    ///
    /// # Arguments
    ///
    /// * `field` - The name of the field that failed validation
    /// * `message` - Error message describing the validation failure
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The offending field, if this is a validation error
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::SerializationError { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

impl From<mongodb::bson::ser::Error> for SharedError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        Self::serialization(format!("BSON encode error: {}", err))
    }
}

impl From<mongodb::bson::de::Error> for SharedError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        Self::serialization(format!("BSON decode error: {}", err))
    }
}
