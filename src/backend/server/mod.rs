//! Server Module
//!
//! Server configuration, state and initialization.
//!
//! - **`config`** - Database connection and migrations
//! - **`state`** - Application state with `FromRef` extraction
//! - **`init`** - Application assembly (`create_app`)

pub mod config;
pub mod init;
pub mod state;

pub use init::create_app;
pub use state::AppState;
