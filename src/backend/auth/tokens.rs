/**
 * Opaque Token Lifecycle
 *
 * This module mints, resolves and revokes opaque bearer tokens. A token is a
 * random unguessable string bound to exactly one user; the database keeps
 * only its SHA-256 digest, so a leaked table does not leak usable tokens.
 *
 * # Lifecycle
 *
 * 1. **Issue**: on successful login, 32 bytes from the OS CSPRNG are hex
 *    encoded and handed to the client once; the digest is inserted into
 *    `access_tokens`.
 * 2. **Resolve**: a presented token is digested and looked up among live
 *    tokens; no side effects (no sliding expiry window).
 * 3. **Revoke**: the matching row is deleted. Revoking an unknown or
 *    already-revoked token is a no-op, so the operation is safe to call
 *    twice.
 *
 * Tokens stay valid until explicitly revoked; there is no TTL.
 */

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;

use crate::backend::auth::users::{self, User};
use crate::backend::error::AuthError;

/// Raw entropy per token value, before hex encoding
const TOKEN_BYTES: usize = 32;

/// Generate a fresh opaque token value
///
/// Each call produces a new 64-character hex string from 32 CSPRNG bytes.
/// The value is never derived from user identity.
pub fn generate_token_value() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Digest a token value for storage or lookup
pub fn hash_token(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}

/// Verify a credential pair against the store
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Login key, matched case-insensitively
/// * `password` - Plaintext password, checked against the bcrypt hash and
///   never logged or stored
///
/// # Errors
/// `AuthError::InvalidCredentials` for both "no such user" and "wrong
/// password"; the caller must not be able to tell them apart.
pub async fn verify_credentials(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    let user = users::get_user_by_email(pool, email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    // bcrypt::verify is constant-time safe on the hash comparison
    let valid = bcrypt::verify(password, &user.password_hash)?;
    if !valid {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user)
}

/// Mint a new token for a user
///
/// A single call mints a single fresh value; a user may hold several live
/// tokens at once (multi-device).
///
/// # Returns
/// The plaintext token value. This is the only time it exists server-side.
pub async fn issue_token(pool: &SqlitePool, user_id: &str) -> Result<String, AuthError> {
    let value = generate_token_value();
    let id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now();

    sqlx::query(
        r#"
        INSERT INTO access_tokens (id, user_id, token_hash, created_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(&id)
    .bind(user_id)
    .bind(hash_token(&value))
    .bind(now)
    .execute(pool)
    .await?;

    Ok(value)
}

/// Resolve a presented token back to its owner
///
/// # Errors
/// `AuthError::Unauthenticated` if the token is empty, malformed or not
/// among live tokens.
pub async fn resolve_token(pool: &SqlitePool, token: &str) -> Result<User, AuthError> {
    if token.trim().is_empty() {
        return Err(AuthError::Unauthenticated);
    }

    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT u.id, u.name, u.email, u.password_hash, u.role, u.created_at, u.updated_at
        FROM users u
        INNER JOIN access_tokens t ON t.user_id = u.id
        WHERE t.token_hash = $1
        "#,
    )
    .bind(hash_token(token))
    .fetch_optional(pool)
    .await?
    .ok_or(AuthError::Unauthenticated)?;

    Ok(user)
}

/// Revoke a token
///
/// Idempotent: deleting an unknown or already-revoked token succeeds.
pub async fn revoke_token(pool: &SqlitePool, token: &str) -> Result<(), AuthError> {
    sqlx::query("DELETE FROM access_tokens WHERE token_hash = $1")
        .bind(hash_token(token))
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token_value_length_and_charset() {
        let value = generate_token_value();
        assert_eq!(value.len(), TOKEN_BYTES * 2);
        assert!(value.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_token_value_is_fresh_per_call() {
        let a = generate_token_value();
        let b = generate_token_value();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_token_is_deterministic() {
        let value = generate_token_value();
        assert_eq!(hash_token(&value), hash_token(&value));
    }

    #[test]
    fn test_hash_token_differs_from_value() {
        let value = generate_token_value();
        let digest = hash_token(&value);
        assert_ne!(digest, value);
        assert_eq!(digest.len(), 64);
    }
}
