use crate::models::HealthResponse;
use axum::Json;
use tracing::debug;

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");

    Json(HealthResponse {
        status: "UP".into(),
        timestamp: chrono::Utc::now(),
        service: "Football Standings API".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}
