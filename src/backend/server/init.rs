/**
 * Server Initialization
 *
 * Assembles the Axum application: database loading, state creation and
 * route configuration.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. **Load Database**: connect and run migrations
/// 2. **Create State**: wrap the pool in [`AppState`]
/// 3. **Create Router**: configure routes and middleware layers
///
/// # Errors
///
/// Propagates database connection and migration failures.
pub async fn create_app() -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing authgate backend server");

    let db_pool = load_database().await?;
    let app_state = AppState::new(db_pool);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
