pub mod control;
pub mod football_data;
pub mod health;

pub use control::{cache_stats, clear_cache, get_offline_mode, set_offline_mode};
pub use football_data::{get_countries, get_leagues, get_standings, get_teams};
pub use health::health_check;
