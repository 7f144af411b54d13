use crate::error::{require_param, ApiError};
use crate::models::{LeaguesQuery, StandingsQuery, TeamsQuery};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::Uri,
    Json,
};
use football::domain::{Country, League, Standing, Team};
use football::planes::data::FootballOperations;
use tracing::info;

/// GET /api/countries
pub async fn get_countries(State(state): State<AppState>) -> Json<Vec<Country>> {
    info!("GET /api/countries - Fetching all countries");

    Json(state.football.get_countries().await)
}

/// GET /api/leagues?country_id=
pub async fn get_leagues(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<LeaguesQuery>,
) -> Result<Json<Vec<League>>, ApiError> {
    let country_id =
        require_param(query.country_id, "country_id").map_err(|e| ApiError::new(e, &uri))?;
    info!("GET /api/leagues?country_id={} - Fetching leagues", country_id);

    Ok(Json(state.football.get_leagues(&country_id).await))
}

/// GET /api/teams?league_id=
pub async fn get_teams(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<TeamsQuery>,
) -> Result<Json<Vec<Team>>, ApiError> {
    let league_id =
        require_param(query.league_id, "league_id").map_err(|e| ApiError::new(e, &uri))?;
    info!("GET /api/teams?league_id={} - Fetching teams", league_id);

    Ok(Json(state.football.get_teams(&league_id).await))
}

/// GET /api/standings?league_id=&team_name=
pub async fn get_standings(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<StandingsQuery>,
) -> Result<Json<Vec<Standing>>, ApiError> {
    let league_id =
        require_param(query.league_id, "league_id").map_err(|e| ApiError::new(e, &uri))?;
    info!(
        "GET /api/standings?league_id={}&team_name={:?} - Fetching standings",
        league_id, query.team_name
    );

    let standings = state
        .football
        .get_standings(&league_id, query.team_name.as_deref())
        .await;

    Ok(Json(standings))
}
