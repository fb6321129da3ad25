/**
 * Login Handler
 *
 * Implements the credential verification handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email (case-insensitive)
 * 2. Verify password using bcrypt
 * 3. Mint a fresh opaque token
 * 4. Return token and user info
 *
 * # Security
 *
 * - Invalid credentials return a 422 with one generic field message for
 *   both "no such user" and "wrong password" (no user enumeration)
 * - Password verification uses constant-time comparison (via bcrypt)
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::tokens::{issue_token, verify_credentials};
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// Verifies the email and password and returns a fresh opaque token along
/// with the user record on success.
///
/// # Errors
///
/// * `422 Unprocessable Entity` - unknown email or wrong password, as a
///   field-keyed validation error on `email`
/// * `500 Internal Server Error` - database or hashing failure
///
/// # Example Request
///
/// ```http
/// POST /api/login HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "a@x.com", "password": "secret"}
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "9f2c…",
///   "user": {"id": "1", "name": "Alice", "email": "a@x.com", "role": "user"}
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    tracing::info!("Login request for: {}", request.email);

    let user = verify_credentials(&state.db_pool, &request.email, &request.password)
        .await
        .map_err(|e| {
            if matches!(e, AuthError::InvalidCredentials) {
                tracing::warn!("Failed login attempt for: {}", request.email);
            }
            e
        })?;

    let token = issue_token(&state.db_pool, &user.id).await?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.to_dto(),
    }))
}
