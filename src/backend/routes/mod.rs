//! Routes Module
//!
//! Route configuration for the backend server.
//!
//! - **`api_routes`** - Authentication endpoints under `/api`
//! - **`router`** - Top-level router assembly with middleware layers

pub mod api_routes;
pub mod router;

pub use router::create_router;
