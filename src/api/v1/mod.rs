//! Versioned user endpoints under `/users/v1`

pub mod users;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create the `/users/v1` router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users/v1", post(users::create_user))
        .route(
            "/users/v1/",
            get(users::missing_id)
                .put(users::missing_id)
                .delete(users::missing_id),
        )
        .route(
            "/users/v1/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}
