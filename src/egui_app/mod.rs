//! egui Native Desktop App Module
//!
//! Native desktop client for the authentication backend.
//!
//! # Architecture
//!
//! - **`config`** - Client configuration (API base URL)
//! - **`token_store`** - Durable single-slot token cache
//! - **`api`** - Request wrapper (bearer attachment, JSON negotiation,
//!   error normalization, no automatic redirects)
//! - **`auth`** - Auth state machine and login/whoami/logout calls
//! - **`state`** - Central application state and worker-thread dispatch
//! - **`views`** - Route protection, login and dashboard views
//! - **`theme`** - Color palette
//! - **`main`** - Application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Application entry point
//! ├── config.rs       - Configuration management
//! ├── token_store.rs  - Durable token cache
//! ├── api.rs          - Request wrapper
//! ├── auth.rs         - Auth state machine and API calls
//! ├── state/          - Central application state
//! ├── views/          - Login / dashboard views and route protection
//! └── theme.rs        - Color palette
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod state;
pub mod theme;
pub mod token_store;
pub mod views;

pub use api::{ApiClient, ApiError};
pub use auth::{AuthPhase, AuthState};
pub use config::Config;
pub use state::AppState;
pub use token_store::TokenStore;
