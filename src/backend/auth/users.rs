/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. Users are created
 * out of band (account management is out of scope); the handlers only read
 * them, the tests insert them through `create_user`.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::shared::user::{UserDto, UserRole};

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID, stored as text)
    pub id: String,
    /// Display name
    pub name: String,
    /// User email address (unique, compared case-insensitively)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Raw role column; may be NULL, normalized at the boundary
    pub role: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build the wire shape for this user
    ///
    /// This is the single point where the role default is applied: a NULL
    /// or unrecognized stored role becomes `"user"` on the wire.
    pub fn to_dto(&self) -> UserDto {
        UserDto {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: UserRole::from_db(self.role.as_deref()),
        }
    }
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Display name
/// * `email` - User email
/// * `password_hash` - Hashed password
/// * `role` - Optional role; `None` leaves the column NULL
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
    role: Option<&str>,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, email, password_hash, role, created_at, updated_at
        "#,
    )
    .bind(&id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// The lookup is case-insensitive: `A@X.COM` and `a@x.com` resolve to the
/// same record.
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role, created_at, updated_at
        FROM users
        WHERE email = $1 COLLATE NOCASE
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::user::UserRole;

    fn sample_user(role: Option<&str>) -> User {
        let now = Utc::now();
        User {
            id: "1".to_string(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
            role: role.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_to_dto_defaults_missing_role() {
        let dto = sample_user(None).to_dto();
        assert_eq!(dto.role, UserRole::User);
        assert_eq!(dto.id, "1");
        assert_eq!(dto.name, "Alice");
    }

    #[test]
    fn test_to_dto_keeps_admin_role() {
        let dto = sample_user(Some("admin")).to_dto();
        assert_eq!(dto.role, UserRole::Admin);
    }

    #[test]
    fn test_to_dto_never_exposes_password_hash() {
        let json = serde_json::to_value(sample_user(None).to_dto()).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
