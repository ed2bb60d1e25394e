//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /health`      - Health check: database (public)
//! - `GET    /users`       - List users
//! - `POST   /users`       - Create a user
//! - `PUT    /users/{id}`  - Replace a user
//! - `DELETE /users/{id}`  - Delete a user
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Handler panics become `500` JSON responses
//! - **CORS** - Any origin may call the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, recover, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and middleware, without path
/// normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::user_routes())
        .with_state(state)
        .layer(recover::layer())
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Wraps [`router`] so that `/users/` and `/users` are the same route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
