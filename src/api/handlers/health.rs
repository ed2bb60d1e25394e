//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use std::time::Instant;

use crate::api::dto::health::{DatabaseCheck, HealthResponse};
use crate::state::AppState;

/// Returns service health with the database check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "latency_ms": 1 }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let response = HealthResponse::from_database(check_database(&state).await);

    if response.is_healthy() {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> DatabaseCheck {
    let started = Instant::now();

    match state.user_service.check_database().await {
        Ok(()) => {
            let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            DatabaseCheck::reachable(latency_ms)
        }
        Err(e) => {
            tracing::error!(operation = "health", error = %e, "database check failed");
            DatabaseCheck::unreachable()
        }
    }
}
