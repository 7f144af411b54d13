use crate::error::{parse_bool_param, ApiError};
use crate::models::{CacheStatsResponse, ClearCacheResponse, OfflineModeQuery, OfflineModeResponse};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::Uri,
    Json,
};
use football::planes::control::ControlOperations;
use tracing::info;

/// POST /api/offline-mode?enabled=
pub async fn set_offline_mode(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<OfflineModeQuery>,
) -> Result<Json<OfflineModeResponse>, ApiError> {
    let enabled = parse_bool_param(query.enabled, "enabled").map_err(|e| ApiError::new(e, &uri))?;
    info!("POST /api/offline-mode?enabled={}", enabled);

    state.control.set_offline_mode(enabled);

    Ok(Json(OfflineModeResponse {
        offline_mode: enabled,
        message: format!(
            "Offline mode {}",
            if enabled { "enabled" } else { "disabled" }
        ),
    }))
}

/// GET /api/offline-mode
pub async fn get_offline_mode(State(state): State<AppState>) -> Json<OfflineModeResponse> {
    Json(OfflineModeResponse {
        offline_mode: state.control.is_offline_mode(),
        message: String::new(),
    })
}

/// DELETE /api/cache
pub async fn clear_cache(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    info!("DELETE /api/cache - Clearing cache");

    state.control.clear_cache().await;

    Json(ClearCacheResponse {
        cleared: true,
        message: "Cache cleared successfully".into(),
    })
}

/// GET /api/cache/stats
pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(CacheStatsResponse {
        entries: state.control.cache_size().await,
        offline_mode: state.control.is_offline_mode(),
    })
}
