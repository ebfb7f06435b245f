//! Route Configuration Module
//!
//! # Architecture
//!
//! - **`router`** - Main router creation and layer stack
//! - **`user_routes`** - Public account routes (signup, login)
//! - **`api_routes`** - Routes behind the token gate
//!
//! # Layer Order
//!
//! Outermost first: `TraceLayer` → request deadline → (gated routes only)
//! auth gate → handler.

pub mod api_routes;
pub mod router;
pub mod user_routes;

pub use router::create_router;
