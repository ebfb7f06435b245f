//! Backend Module
//!
//! Server-side code: the Axum HTTP server, authentication, the document
//! store and the restaurant resource handlers.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, store loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Passwords, JWT tokens, user accounts
//! - **`middleware`** - Token gate and request deadline
//! - **`restaurant`** - Food, menu, table, order, order item, invoice handlers
//! - **`store`** - Collection trait with MongoDB and in-memory backends
//! - **`extract`** - Request extractors
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── restaurant/     - Resource handlers
//! ├── store/          - Document store
//! ├── extract.rs      - JSON body extractor
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! inbound request → trace span → deadline → auth gate (gated routes) →
//! handler → one store operation → JSON response
//!
//! # Error Handling
//!
//! Handlers return `Result<Json<T>, BackendError>`; every failure renders as
//! `{"error": ..., "status": ...}` with the mapped status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Restaurant resource handlers
pub mod restaurant;

/// Document store
pub mod store;

/// Request extractors
pub mod extract;

pub use error::BackendError;
pub use server::{build_router, create_app, AppState};
