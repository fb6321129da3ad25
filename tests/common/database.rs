//! Database test fixtures
//!
//! Each fixture is an isolated in-memory SQLite database with migrations
//! applied. The pool is capped at a single connection: an in-memory
//! database exists per connection, so more than one would see an empty
//! schema.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a fresh in-memory database with migrations applied
    pub async fn new() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
