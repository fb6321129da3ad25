//! Shared Types Module
//!
//! Types used by both the backend server and the egui client:
//!
//! - **`user`** - The wire user shape and the `UserRole` enum with its
//!   single role-defaulting boundary function
//! - **`config`** - Application configuration builder

pub mod config;
pub mod user;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use user::{UserDto, UserRole};
