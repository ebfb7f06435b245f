//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `HandlerError` - Request-level failures with an explicit status
//! - `Store` - Document store failures (duplicates become 409)
//! - `Token` - Token signing or persistence failures
//! - `Password` - Password hashing failures
//! - `Timeout` - The request deadline elapsed
//! - `SharedError` - Validation (400) and payload conversion (500) errors
//!
//! Every error renders as a single JSON body:
//!
//! ```json
//! { "error": "Invalid token", "status": 403 }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
