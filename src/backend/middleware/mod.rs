//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`map_auth_header`** - Transport-normalization shim that relocates the
//!   bearer credential from alternate header slots into `Authorization`.
//!   Runs before any authentication parsing and can be disabled by simply
//!   not layering it.
//! - **`auth`** - Bearer parsing and the authentication middleware guarding
//!   protected routes.

pub mod auth;
pub mod map_auth_header;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
pub use map_auth_header::map_auth_header;
