//! Authentication Module
//!
//! This module handles credential verification, opaque token lifecycle and
//! the HTTP handlers composing them.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and database operations
//! - **`tokens`** - Opaque bearer token issuance, resolution and revocation
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── tokens.rs       - Token lifecycle (issue / resolve / revoke)
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── login.rs    - Credential verification handler
//!     ├── me.rs       - Current user handler
//!     └── logout.rs   - Token revocation handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: email + password → credentials verified → fresh opaque token
//! 2. **Me**: bearer token → resolved against live tokens → user info
//! 3. **Logout**: bearer token → revoked (idempotent), always 204
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt; verification is constant-time safe
//! - Token values are 32 bytes from the OS CSPRNG; only their SHA-256
//!   digest is stored
//! - Failed logins return one generic message regardless of the cause
//! - Tokens stay valid until explicitly revoked (no TTL)

/// User data model and database operations
pub mod users;

/// Opaque token lifecycle
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest};
pub use handlers::{get_me, login, logout};
pub use tokens::{issue_token, resolve_token, revoke_token, verify_credentials};
