use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use tracing::{info, instrument};
use utoipa::ToSchema;

use super::model::{AuthResponse, MessageResponse, SigninRequest, SignupRequest};
use super::service::AuthService;
use crate::state::AppState;
use crate::utils::cookies::{auth_cookie, clear_auth_cookie};
use crate::utils::errors::AppError;
use crate::utils::jwt::create_token;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/sign-up",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User registered successfully, auth cookie set", body = AuthResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), AppError> {
    let user = AuthService::signup(&state.db, dto).await?;

    let token = create_token(user.id, &user.email, user.role, &state.jwt_config)?;
    let jar = jar.add(auth_cookie(token, &state.jwt_config));

    info!("User registered successfully: {}", user.email);

    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse {
            message: "User registered.".to_string(),
            user,
        }),
    ))
}

/// Sign in and receive an auth cookie
#[utoipa::path(
    post,
    path = "/api/auth/sign-in",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signed in, auth cookie set", body = AuthResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<SigninRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let user = AuthService::signin(&state.db, dto).await?;

    let token = create_token(user.id, &user.email, user.role, &state.jwt_config)?;
    let jar = jar.add(auth_cookie(token, &state.jwt_config));

    info!("User signed in: {}", user.email);

    Ok((
        jar,
        Json(AuthResponse {
            message: "Signed in.".to_string(),
            user,
        }),
    ))
}

/// Sign out by clearing the auth cookie
#[utoipa::path(
    post,
    path = "/api/auth/sign-out",
    responses(
        (status = 200, description = "Signed out, auth cookie cleared", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn signout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(clear_auth_cookie());

    (
        jar,
        Json(MessageResponse {
            message: "Signed out.".to_string(),
        }),
    )
}
