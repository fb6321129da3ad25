/**
 * Application State Management
 *
 * Defines the application state container and the `FromRef` implementations
 * Axum uses for state extraction.
 *
 * # Thread Safety
 *
 * `SqlitePool` is internally reference-counted and safe to clone into every
 * handler; concurrent reads of the same token are delegated to the pool's
 * transaction discipline.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Credential and token store
    pub db_pool: SqlitePool,
}

impl AppState {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }
}

/// Allow handlers to extract the pool directly via `State(SqlitePool)`
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
