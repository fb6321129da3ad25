/**
 * Authentication Middleware
 *
 * Protects routes that require a valid bearer token. The token is extracted
 * from the `Authorization` header (after the remapping shim has run),
 * resolved against live tokens, and the owning user is attached to the
 * request extensions for handlers to consume.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::tokens::resolve_token;
use crate::backend::auth::users::User;
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;

/// Authenticated user data resolved from a bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    /// The user owning the presented token
    pub user: User,
    /// The plaintext token value, kept so logout-style handlers can revoke it
    pub token: String,
}

/// Extract the bearer token from request headers
///
/// Returns `None` when the header is absent, unreadable, or not using the
/// `Bearer` scheme.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Authentication middleware
///
/// 1. Extracts the bearer token from the `Authorization` header
/// 2. Resolves it against live tokens
/// 3. Attaches [`AuthenticatedUser`] to the request extensions
///
/// Returns `401 Unauthorized` if the token is missing, malformed or revoked.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            AuthError::Unauthenticated
        })?
        .to_string();

    let user = resolve_token(&state.db_pool, &token).await?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user, token });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter on routes layered with [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AuthError::Unauthenticated
            })?;

        Ok(AuthUser(user))
    }
}
