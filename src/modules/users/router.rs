use axum::{Router, middleware, routing::get};

use super::controller::{delete_user, fetch_all_users, get_user_by_id, update_user};
use crate::middleware::auth::require_auth;
use crate::middleware::role::{require_admin, require_self_or_admin};
use crate::state::AppState;

/// Listing is admin-only; everything addressed by id is self-or-admin.
/// The outer `require_auth` layer runs first and attaches the identity the
/// role policies and handlers read.
pub fn init_users_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(fetch_all_users)
                .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
        )
        .route(
            "/{id}",
            get(get_user_by_id)
                .put(update_user)
                .delete(delete_user)
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    require_self_or_admin,
                )),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
