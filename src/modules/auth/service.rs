use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{info, instrument};

use crate::modules::users::model::{User, UserRole};
use crate::utils::errors::{AppError, is_unique_violation};
use crate::utils::password::{hash_password, verify_password};

use super::model::{SigninRequest, SignupRequest};

/// The only boundary where plaintext passwords and credential hashes exist.
/// Neither ever leaves this module in a return value or a log line.
pub struct AuthService;

impl AuthService {
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn signup(db: &PgPool, dto: SignupRequest) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;
        let role = dto.role.unwrap_or_default();

        // Uniqueness is the store's job; a racing duplicate insert surfaces
        // here as a unique violation rather than a pre-check.
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password, role)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, role, created_at, updated_at",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(role)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::EmailTaken
            } else {
                e.into()
            }
        })?;

        info!("User {} created successfully", user.email);
        Ok(user)
    }

    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn signin(db: &PgPool, dto: SigninRequest) -> Result<User, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: i64,
            name: String,
            email: String,
            password: String,
            role: UserRole,
            created_at: DateTime<Utc>,
            updated_at: DateTime<Utc>,
        }

        // Unknown email and wrong password produce the same error so the
        // endpoint cannot be used to enumerate accounts.
        let user_with_password = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, name, email, password, role, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

        let is_valid = verify_password(&dto.password, &user_with_password.password)?;
        if !is_valid {
            return Err(AppError::InvalidCredentials);
        }

        let user = User {
            id: user_with_password.id,
            name: user_with_password.name,
            email: user_with_password.email,
            role: user_with_password.role,
            created_at: user_with_password.created_at,
            updated_at: user_with_password.updated_at,
        };

        info!("User {} signed in", user.email);
        Ok(user)
    }
}
