use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{info, instrument};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{
    UpdateUserDto, UserDeletedResponse, UserResponse, UsersListResponse,
};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = UsersListResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn fetch_all_users(
    State(state): State<AppState>,
) -> Result<Json<UsersListResponse>, AppError> {
    let users = UserService::get_users(&state.db).await?;

    Ok(Json(UsersListResponse {
        message: "Successfully retrieved users".to_string(),
        count: users.len(),
        users,
    }))
}

/// Get a user by id (self or admin)
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The requested user", body = UserResponse),
        (status = 400, description = "Invalid resource id", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the owner and not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = UserService::get_user(&state.db, id).await?;

    Ok(Json(UserResponse { user }))
}

/// Update a user (self or admin; only admins may change `role`)
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "The updated user", body = UserResponse),
        (status = 400, description = "Validation error or nothing to update", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse)
    ),
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<UserResponse>, AppError> {
    // Self-or-admin access is enforced by the route policy; the remaining
    // field-level rule is that only admins may touch `role`.
    if dto.role.is_some() && !auth_user.is_admin() {
        return Err(AppError::forbidden("Forbidden: cannot change role"));
    }

    let user = UserService::update_user(&state.db, id, dto).await?;

    info!("Updated user {} by {}", id, auth_user.email());

    Ok(Json(UserResponse { user }))
}

/// Delete a user (self or admin)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The deleted user", body = UserDeletedResponse),
        (status = 400, description = "Invalid resource id", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the owner and not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<UserDeletedResponse>, AppError> {
    let user = UserService::delete_user(&state.db, id).await?;

    info!("Deleted user {} by {}", id, auth_user.email());

    Ok(Json(UserDeletedResponse {
        message: "User deleted.".to_string(),
        user,
    }))
}
