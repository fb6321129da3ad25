//! Backend Module
//!
//! Server-side code for the authentication service.
//!
//! # Architecture
//!
//! - **`auth`** - Credential verification, token lifecycle, HTTP handlers
//! - **`error`** - Error taxonomy and HTTP response conversion
//! - **`middleware`** - Header-remapping shim and bearer authentication
//! - **`routes`** - Router assembly
//! - **`server`** - Configuration, state and initialization

pub mod auth;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
