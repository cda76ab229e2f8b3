use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use tracing::warn;

use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::cookies::AUTH_COOKIE;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the request token and provides the
/// authenticated user's claims.
///
/// The claims are a snapshot taken at token issuance; a role or email
/// change only becomes visible once the user re-authenticates.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Get the user id as the canonical numeric form used by every
    /// ownership comparison.
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid user id in token"))
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }

    pub fn is_admin(&self) -> bool {
        self.0.role == UserRole::Admin
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Reuse the identity attached by `require_auth` when it already ran
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        // A missing token is expected traffic and not worth a log line
        let token = extract_token(parts)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        let claims = verify_token(&token, &state.jwt_config).inspect_err(|_| {
            warn!(uri = %parts.uri, "Rejected request with invalid or expired token");
        })?;

        Ok(AuthUser(claims))
    }
}

/// Token transport: the `token` cookie, with `Authorization: Bearer` as a
/// fallback for non-browser clients.
fn extract_token(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(AUTH_COOKIE) {
        return Some(cookie.value().to_string());
    }

    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

/// Middleware that authenticates the request and attaches the decoded
/// identity to it, so downstream policies and handlers share one
/// verification.
pub async fn require_auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let auth_user = match AuthUser::from_request_parts(&mut parts, &state).await {
        Ok(user) => user,
        Err(e) => return e.into_response(),
    };

    parts.extensions.insert(auth_user);
    let req = Request::from_parts(parts, body);
    next.run(req).await
}
