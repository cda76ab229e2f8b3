use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use crate::config::jwt::JwtConfig;

/// Name of the cookie carrying the signed token.
pub const AUTH_COOKIE: &str = "token";

/// Builds the auth cookie set on sign-up and sign-in. HttpOnly and
/// SameSite=Strict; Secure outside development so the token never travels
/// over plain HTTP in production.
pub fn auth_cookie(token: String, jwt_config: &JwtConfig) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(is_production())
        .max_age(Duration::seconds(jwt_config.expires_in))
        .build()
}

/// Cookie handle used to clear the auth cookie on sign-out. Path must match
/// the one set in [`auth_cookie`] for browsers to drop it.
pub fn clear_auth_cookie() -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, "")).path("/").build()
}

fn is_production() -> bool {
    std::env::var("APP_ENV")
        .map(|v| v == "production")
        .unwrap_or(false)
}
