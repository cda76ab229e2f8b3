//! User data models and DTOs.
//!
//! # Core Types
//!
//! - [`User`] - User entity as returned by the API (never carries the
//!   credential hash; that column only exists inside the auth service)
//! - [`UserRole`] - The two system roles, `user` and `admin`
//!
//! # Request DTOs
//!
//! - [`UpdateUserDto`] - Partial update; only `name`, `email`, and `role`
//!   are mutable, anything else never reaches the service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Coarse privilege tag carried in the token and on the user record.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user record as exposed by the API.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for updating a user.
///
/// All fields are optional; a request carrying none of them is rejected
/// before touching the store. Role changes are additionally gated to
/// admins by the update handler.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

impl UpdateUserDto {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }
}

/// Response wrapping a single user.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub user: User,
}

/// Response for the user list endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersListResponse {
    pub message: String,
    pub users: Vec<User>,
    pub count: usize,
}

/// Response returned after deleting a user.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDeletedResponse {
    pub message: String,
    pub user: User,
}
