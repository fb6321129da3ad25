/**
 * Logout Handler
 *
 * Implements the token revocation handler for POST /api/logout.
 *
 * The route deliberately does NOT sit behind the auth middleware: logout
 * must succeed with a 204 even when the token is already revoked or plain
 * garbage, so the client can always treat logout as succeeding locally.
 * Calling it twice in a row returns 204 both times.
 */

use axum::{extract::State, http::HeaderMap, http::StatusCode};

use crate::backend::auth::tokens::revoke_token;
use crate::backend::middleware::auth::bearer_token;
use crate::backend::server::state::AppState;

/// Logout handler
///
/// Best-effort revokes whatever bearer value is presented. Revocation
/// failures are logged and swallowed; the response is always `204 No
/// Content` with an empty body.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = bearer_token(&headers) {
        if let Err(e) = revoke_token(&state.db_pool, token).await {
            tracing::warn!("Token revocation failed: {:?}", e);
        }
    } else {
        tracing::debug!("Logout without bearer token");
    }

    StatusCode::NO_CONTENT
}
