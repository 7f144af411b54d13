use crate::domain::{Country, League, Standing, Team};
use async_trait::async_trait;

/// Read operations over football data, served through the cache
#[async_trait]
pub trait FootballOperations: Send + Sync + 'static {
    async fn get_countries(&self) -> Vec<Country>;

    async fn get_leagues(&self, country_id: &str) -> Vec<League>;

    async fn get_teams(&self, league_id: &str) -> Vec<Team>;

    /// Standings for a league, optionally narrowed to teams whose name contains
    /// `team_name` (case-insensitive). Blank filters are ignored.
    async fn get_standings(&self, league_id: &str, team_name: Option<&str>) -> Vec<Standing>;
}
