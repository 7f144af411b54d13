use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// === Query Parameters ===

#[derive(Debug, Deserialize)]
pub struct LeaguesQuery {
    pub country_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TeamsQuery {
    pub league_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StandingsQuery {
    pub league_id: Option<String>,
    pub team_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OfflineModeQuery {
    pub enabled: Option<String>,
}

// === Responses ===

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OfflineModeResponse {
    pub offline_mode: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClearCacheResponse {
    pub cleared: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CacheStatsResponse {
    pub entries: usize,
    pub offline_mode: bool,
}

// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}
