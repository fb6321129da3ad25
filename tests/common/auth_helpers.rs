//! Authentication test helpers
//!
//! Utilities for seeding users and issuing tokens for the API tests.

use authgate::backend::auth::{issue_token, users::create_user};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Test user credentials with a live token
pub struct TestUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a user in the database and issue a token for it
pub async fn create_test_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password: &str,
    role: Option<&str>,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    let user = create_user(pool, name, email, &password_hash, role).await?;
    let token = issue_token(pool, &user.id).await?;

    Ok(TestUser {
        id: user.id,
        name: user.name,
        email: user.email,
        password: password.to_string(),
        token,
    })
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(
    pool: &SqlitePool,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(pool, "Test User", &email, "test_password_123", None).await
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
