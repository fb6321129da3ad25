/**
 * Authentication Handler Types
 *
 * Request and response types used by the authentication handlers. The user
 * payload is the shared wire shape, so the login response's `user` and the
 * whoami response are guaranteed identical.
 */

use serde::{Deserialize, Serialize};

use crate::shared::user::UserDto;

/// Login request
///
/// Contains the email and password for user authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Login key, matched case-insensitively
    pub email: String,
    /// Plaintext password, verified against the stored bcrypt hash
    pub password: String,
}

/// Auth response
///
/// Returned by the login handler. Contains the freshly minted opaque token
/// and the user record with the role default already applied.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Opaque bearer token, valid until explicitly revoked
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserDto,
}
