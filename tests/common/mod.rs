//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-memory test application with a controllable clock
//! - Authentication test helpers
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;

pub use app::*;
pub use auth_helpers::*;
