use sqlx::PgPool;
use tracing::{info, instrument};

use crate::modules::users::model::{UpdateUserDto, User};
use crate::utils::errors::{AppError, is_unique_violation};

/// CRUD over user records. Assumes the caller already authorized the
/// request; field-level policy (who may set `role`) is the handler's job.
pub struct UserService;

impl UserService {
    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at, updated_at FROM users ORDER BY id",
        )
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    pub async fn get_user(db: &PgPool, id: i64) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(AppError::UserNotFound)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_user(db: &PgPool, id: i64, dto: UpdateUserDto) -> Result<User, AppError> {
        if dto.is_empty() {
            return Err(AppError::NothingToUpdate);
        }

        let user = sqlx::query_as::<_, User>(
            "UPDATE users
             SET name = COALESCE($2, name),
                 email = COALESCE($3, email),
                 role = COALESCE($4, role),
                 updated_at = now()
             WHERE id = $1
             RETURNING id, name, email, role, created_at, updated_at",
        )
        .bind(id)
        .bind(dto.name)
        .bind(dto.email)
        .bind(dto.role)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::EmailTaken
            } else {
                AppError::from(e)
            }
        })?
        .ok_or(AppError::UserNotFound)?;

        info!("User {} updated successfully", user.email);
        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: i64) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "DELETE FROM users WHERE id = $1
             RETURNING id, name, email, role, created_at, updated_at",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(AppError::UserNotFound)?;

        info!("User {} deleted successfully", user.email);
        Ok(user)
    }
}
