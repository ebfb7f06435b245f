//! Server Module
//!
//! Server initialization and configuration.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Store selection and startup checks
//! - **`init`** - Server initialization and app creation
//!
//! # Initialization Flow
//!
//! 1. **Store**: MongoDB when `MONGODB_URI` is set (ping, unique indexes),
//!    otherwise in-memory collections
//! 2. **State**: Token service, password hasher and clock wired around the
//!    collections
//! 3. **Router**: Public account routes, gated resource routes, deadline and
//!    trace layers
//!
//! # Example
//!
//! ```rust,no_run
//! use resto_api::backend::server::create_app;
//! use resto_api::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state and FromRef implementations
pub mod state;

/// Store loading
pub mod config;

/// Server initialization
pub mod init;

pub use init::{build_router, create_app};
pub use state::AppState;
