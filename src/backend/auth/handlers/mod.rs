//! Authentication Handlers Module
//!
//! HTTP handlers for the three authentication endpoints.
//!
//! # Handlers
//!
//! - **`login`** - POST /api/login - Credential verification, token issuance
//! - **`get_me`** - GET /api/me - Current user info (protected)
//! - **`logout`** - POST /api/logout - Token revocation (always 204)

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Current user handler
pub mod me;

/// Logout handler
pub mod logout;

pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use types::{AuthResponse, LoginRequest};
