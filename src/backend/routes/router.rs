/**
 * Router Configuration
 *
 * Combines the API routes and middleware layers into a single Axum router.
 *
 * # Layer Order
 *
 * The header-remapping shim wraps everything so it runs before the auth
 * middleware parses the `Authorization` header. Tracing wraps the shim so
 * every request is logged, remapped or not.
 */

use axum::{http::StatusCode, middleware, Router};
use tower_http::trace::TraceLayer;

use crate::backend::middleware::map_auth_header::map_auth_header;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the database pool
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_api_routes(router, &app_state);

    let router = router
        .layer(middleware::from_fn(map_auth_header))
        .layer(TraceLayer::new_for_http())
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router.with_state(app_state)
}
