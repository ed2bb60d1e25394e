//! Handlers for user CRUD endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::user::{UserItem, UserPayload};
use crate::error::AppError;
use crate::state::AppState;

/// Unwraps a JSON body, mapping any rejection to `400 Invalid input`.
fn parse_body(
    operation: &'static str,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<UserPayload, AppError> {
    payload.map(|Json(p)| p).map_err(|rejection| {
        tracing::warn!(operation, error = %rejection, "invalid request body");
        AppError::bad_request("Invalid input")
    })
}

/// Unwraps the `{id}` path segment, mapping any rejection to `400 Invalid user ID`.
fn parse_id(
    operation: &'static str,
    id: Result<Path<i64>, PathRejection>,
) -> Result<i64, AppError> {
    id.map(|Path(id)| id).map_err(|rejection| {
        tracing::warn!(operation, error = %rejection, "invalid user id");
        AppError::bad_request("Invalid user ID")
    })
}

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users`
///
/// Returns an empty array when there are no users.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserItem>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserItem::from).collect()))
}

/// Creates a new user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 if the body is malformed or a required field is empty.
/// Returns 409 if the user name is already taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<UserItem>), AppError> {
    let payload = parse_body("create_user", payload)?;

    let user = state
        .user_service
        .create_user(payload.user_name, payload.email)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Replaces a user's name and email.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// The path `id` always wins over any `id` in the body. The target row is not
/// checked for existence, so an unknown `id` still yields 200.
///
/// # Errors
///
/// Returns 400 if the `id` is not an integer or the body is malformed.
pub async fn update_user_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<UserItem>, AppError> {
    let id = parse_id("update_user", id)?;
    let payload = parse_body("update_user", payload)?;

    let user = state
        .user_service
        .update_user(id, payload.user_name, payload.email)
        .await?;

    Ok(Json(user.into()))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// Idempotent: deleting an unknown `id` returns 204 as well.
///
/// # Errors
///
/// Returns 400 if the `id` is not an integer.
pub async fn delete_user_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = parse_id("delete_user", id)?;

    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
