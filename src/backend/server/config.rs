/**
 * Server Configuration
 *
 * Loads the database connection for the credential and token store.
 *
 * # Configuration Sources
 *
 * `DATABASE_URL` from the environment, with a local SQLite file as the
 * default for development. The file is created on demand (`mode=rwc`), so a
 * fresh checkout starts without any setup.
 */

use sqlx::SqlitePool;

/// Default development database
const DEFAULT_DATABASE_URL: &str = "sqlite://authgate.db?mode=rwc";

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment (SQLite default otherwise)
/// 2. Creates a connection pool
/// 3. Runs database migrations
///
/// # Errors
///
/// Connection or migration failures are returned to the caller; the server
/// cannot do anything useful without its credential store.
pub async fn load_database() -> Result<SqlitePool, sqlx::Error> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!(
                "DATABASE_URL not set, using default: {}",
                DEFAULT_DATABASE_URL
            );
            DEFAULT_DATABASE_URL.to_string()
        }
    };

    tracing::info!("Connecting to database...");
    let pool = SqlitePool::connect(&database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
