/**
 * API Route Handlers
 *
 * Route configuration for the authentication endpoints.
 *
 * # Routes
 *
 * - `POST /api/login` - Credential verification, token issuance
 * - `GET /api/me` - Current user info (behind the auth middleware)
 * - `POST /api/logout` - Token revocation, always 204
 *
 * Only `/api/me` sits behind the auth middleware. Login obviously cannot,
 * and logout must accept dead tokens to stay idempotent from the client's
 * point of view.
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{get_me, login, logout};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;

/// Add the authentication API routes to a router
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    router
        .route("/api/login", post(login))
        .route(
            "/api/me",
            get(get_me).layer(middleware::from_fn_with_state(
                app_state.clone(),
                auth_middleware,
            )),
        )
        .route("/api/logout", post(logout))
}
