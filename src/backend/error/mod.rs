//! Error Module
//!
//! Defines the backend error taxonomy and its conversion to HTTP responses.
//!
//! # Error Types
//!
//! - `AuthError::InvalidCredentials` - login only, maps to a field-level
//!   validation error (422)
//! - `AuthError::Unauthenticated` - missing/invalid/revoked token (401)
//! - `AuthError::Database` / `AuthError::Hash` - internal failures (500),
//!   logged but never leaked to clients

pub mod conversion;
pub mod types;

pub use types::{AuthError, INVALID_CREDENTIALS_MESSAGE};
