//! API integration tests
//!
//! Integration tests for all API endpoints

mod auth_test;
mod foods_test;
mod gate_test;
mod timeout_test;
