/**
 * Backend Error Types
 *
 * This module defines the error taxonomy for the authentication backend.
 * Credential and token errors are generated at the token issuer/validator
 * boundary and surfaced verbatim by the endpoint layer; internal errors are
 * logged and collapsed into a generic 500.
 */

use thiserror::Error;

/// Message returned for any failed login attempt
///
/// The same message covers "no such user" and "wrong password" so the
/// response does not reveal whether an email exists.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Les identifiants fournis sont incorrects.";

/// Authentication backend errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login failed: unknown email or wrong password
    ///
    /// Maps to a 422 with a field-keyed validation error on `email`.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The presented token is absent, malformed or not among live tokens
    ///
    /// Maps to a 401. This is the signal the client uses to clear its
    /// cached token.
    #[error("unauthenticated")]
    Unauthenticated,

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hash verification error
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}
