//! Middleware for authentication and authorization.
//!
//! # Request Flow
//!
//! 1. Client sends a request carrying the `token` cookie (or an
//!    `Authorization: Bearer <token>` header)
//! 2. [`auth::require_auth`] verifies the token and attaches the decoded
//!    [`auth::AuthUser`] to the request
//! 3. A [`role`] policy accepts or rejects based on the identity and the
//!    route: role membership, or resource ownership
//! 4. The handler runs; it receives the same identity through the
//!    [`auth::AuthUser`] extractor
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::auth::require_auth;
//! use crate::middleware::role::require_admin;
//!
//! let router = Router::new()
//!     .route(
//!         "/reports",
//!         get(reports).route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
//!     )
//!     .route_layer(middleware::from_fn_with_state(state, require_auth));
//! ```

pub mod auth;
pub mod role;
