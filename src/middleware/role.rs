//! Role- and ownership-based authorization middleware.
//!
//! Policies are layered after authentication and come in two shapes:
//!
//! 1. Role membership (`require_roles` and the `require_admin` wrapper)
//! 2. Ownership with a role escape hatch (`require_self_or_roles` and the
//!    `require_self_or_admin` wrapper): the caller may act on their own
//!    record regardless of role
//!
//! The pure `authorize_*` predicates hold the decision logic so it exists
//! in exactly one place and can be tested without a router.

use axum::{
    extract::{FromRequestParts, Path, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Accept when the caller's role is in `allowed_roles`.
pub fn authorize_roles(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if !allowed_roles.contains(&auth_user.role()) {
        return Err(AppError::forbidden("Forbidden"));
    }

    Ok(())
}

/// Accept when the caller owns the target resource or holds one of
/// `allowed_roles`. Ownership always wins: an owner passes even with no
/// elevated role. Ids are compared numerically.
pub fn authorize_self_or_roles(
    auth_user: &AuthUser,
    resource_id: i64,
    allowed_roles: &[UserRole],
) -> Result<(), AppError> {
    let is_self = auth_user.user_id()? == resource_id;

    if is_self || allowed_roles.contains(&auth_user.role()) {
        return Ok(());
    }

    Err(AppError::forbidden("Forbidden"))
}

/// Middleware that checks the authenticated user holds one of the required
/// roles.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/reports", get(reports_handler))
///     .layer(middleware::from_fn_with_state(
///         state.clone(),
///         |state, req, next| require_roles(state, req, next, vec![UserRole::Admin]),
///     ));
/// ```
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    authorize_roles(&auth_user, &allowed_roles)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Wrapper for admin-only routes.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Middleware for routes addressing a single resource by a path id: the
/// caller must own the resource or hold one of the allowed roles.
///
/// The id segment is taken as a raw string and normalized to `i64` here,
/// so a malformed id is a 400 before any policy decision.
pub async fn require_self_or_roles(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    let resource_id: i64 = raw_id
        .parse()
        .map_err(|_| AppError::bad_request("Invalid resource id"))?;

    authorize_self_or_roles(&auth_user, resource_id, &allowed_roles)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Wrapper for `/{id}` routes where the owner or an admin may act.
pub async fn require_self_or_admin(
    State(state): State<AppState>,
    path: Path<String>,
    req: Request,
    next: Next,
) -> Response {
    match require_self_or_roles(State(state), path, req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
