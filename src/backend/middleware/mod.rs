//! Middleware Module
//!
//! - **`auth`** - The `token` header gate for protected routes
//! - **`deadline`** - Per-request deadline

pub mod auth;
pub mod deadline;

pub use auth::{auth_gate, AuthUser, AuthenticatedUser, TOKEN_HEADER};
pub use deadline::{deadline, RequestTimeout};
