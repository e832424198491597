//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;
use crate::state::AppState;

/// Public health check response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    /// Status indicator (always "ok")
    pub status: String,
}

/// Public health check handler that returns simple status
///
/// # Example
/// ```bash
/// curl http://localhost:3000/health
/// # Returns: {"status":"ok"}
/// ```
pub async fn health_check(
    State(_state): State<AppState>,
) -> Json<HealthCheckResponse> {
    tracing::debug!("Health check requested");
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}
