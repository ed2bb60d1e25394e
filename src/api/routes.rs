//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, list_users_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// User CRUD routes.
///
/// # Endpoints
///
/// - `GET    /users`       - List all users
/// - `POST   /users`       - Create a user
/// - `PUT    /users/{id}`  - Replace a user's name and email
/// - `DELETE /users/{id}`  - Delete a user
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            put(update_user_handler).delete(delete_user_handler),
        )
}
