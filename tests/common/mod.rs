//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests:
//! - In-memory database setup with migrations
//! - User and token helpers

pub mod auth_helpers;
pub mod database;

#[allow(unused_imports)]
pub use auth_helpers::*;
#[allow(unused_imports)]
pub use database::*;
