//! Authgate - Main Library
//!
//! Authgate is a minimal token-based authentication system: an Axum backend
//! that issues opaque bearer tokens on credential verification, and a native
//! egui desktop client that caches the token, attaches it to every request,
//! and routes unauthenticated users to a login view.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between the client and the backend
//!   - The wire user shape and the role-defaulting boundary
//!   - Application configuration builder
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - Axum HTTP server with login / me / logout endpoints
//!   - Opaque token issuance, resolution and revocation over sqlx/SQLite
//!   - Header-remapping compatibility shim and auth middleware
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Durable token cache
//!   - Request wrapper normalizing errors into a single contract
//!   - Auth state machine driving route protection
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the
//!   `authgate-server` binary. The client builds without it.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), sqlx::Error> {
//! let app = authgate::backend::server::init::create_app().await?;
//! // Serve `app` with Axum
//! # Ok(())
//! # }
//! ```
//!
//! ## Native Desktop App
//!
//! Run with `cargo run --bin egui_app`.

/// Types shared between frontend and backend
pub mod shared;

/// Server-side code (Axum HTTP server, token lifecycle, handlers)
#[cfg(feature = "ssr")]
pub mod backend;

/// Native desktop app (egui/eframe)
pub mod egui_app;
