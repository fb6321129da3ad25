/**
 * Wire User Shape
 *
 * This module defines the user record as it travels over the wire, shared by
 * the login response, the whoami response, and the client's cached user.
 */

use serde::{Deserialize, Serialize};

/// User role attribute
///
/// A single string field, not a permission engine. Storage may hold no role
/// at all; the default is applied at every boundary that emits a user record
/// via [`UserRole::from_db`], never inline per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Administrator
    Admin,
    /// Regular user (the default when storage has no explicit role)
    #[default]
    User,
}

impl UserRole {
    /// Normalize a raw stored role into a wire role
    ///
    /// Absent and unrecognized values both collapse to [`UserRole::User`].
    /// This is the only place the role default is applied.
    pub fn from_db(raw: Option<&str>) -> Self {
        match raw {
            Some("admin") => UserRole::Admin,
            _ => UserRole::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }
}

/// User record as emitted by the API and cached by the client
///
/// The login response's `user` field and the whoami response carry exactly
/// this shape. It never includes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    /// Opaque stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Login key, unique case-insensitively
    pub email: String,
    /// Role with the default already applied
    pub role: UserRole,
}
