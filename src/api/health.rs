use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Healthcheck response body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResponse {
    /// Always `"available"` when the server is running.
    pub status: String,
    /// Environment name the server was started with.
    pub environment: String,
    /// Crate version.
    pub version: String,
}

/// GET /healthcheck
pub async fn healthcheck(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "available".to_string(),
        environment: state.env.clone(),
        version: VERSION.to_string(),
    })
}
