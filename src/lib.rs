//! Restaurant API - Main Library
//!
//! A restaurant-management REST API: CRUD over users, foods, menus, tables,
//! orders, order items and invoices on a document store, with JWT sessions
//! gating every non-account route.
//!
//! # Module Structure
//!
//! - **`shared`** - Store-independent types
//!   - Configuration, pagination, validation helpers
//!   - Restaurant entity models and request types
//!   - Error types
//!
//! - **`backend`** - Server-side code
//!   - Axum router, middleware and handlers
//!   - Token service and password hashing
//!   - MongoDB and in-memory collections
//!
//! # Usage
//!
//! ```rust,no_run
//! use resto_api::backend::server::create_app;
//! use resto_api::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod shared;

pub mod backend;
