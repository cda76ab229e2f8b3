use axum::{Router, routing::post};

use super::controller::{signin, signout, signup};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(signup))
        .route("/sign-in", post(signin))
        .route("/sign-out", post(signout))
}
