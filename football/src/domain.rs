//! Football records as served by apifootball.com, plus the cache keys and the
//! payload envelope that lets one cache hold every resource kind.

use serde::{Deserialize, Serialize};
use shared::TtlMs;
use shared::config::TtlConfig;
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    pub country_id: String,
    pub country_name: String,
    pub country_logo: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct League {
    pub country_id: String,
    pub country_name: String,
    pub league_id: String,
    pub league_name: String,
    pub league_season: String,
    pub league_logo: String,
    pub country_logo: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Venue {
    pub venue_name: String,
    pub venue_address: String,
    pub venue_city: String,
    pub venue_capacity: String,
    pub venue_surface: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub team_key: String,
    pub team_name: String,
    pub team_country: String,
    pub team_founded: String,
    pub team_badge: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
}

/// One row of a league table. Field names follow the upstream payload verbatim,
/// including its `payed` spelling and upper-case stat suffixes.
#[allow(non_snake_case)]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Standing {
    pub country_name: String,
    pub league_id: String,
    pub league_name: String,
    pub team_id: String,
    pub team_name: String,
    pub overall_promotion: String,
    pub overall_league_position: String,
    pub overall_league_payed: String,
    pub overall_league_W: String,
    pub overall_league_D: String,
    pub overall_league_L: String,
    pub overall_league_GF: String,
    pub overall_league_GA: String,
    pub overall_league_PTS: String,
    pub home_league_position: String,
    pub home_league_payed: String,
    pub home_league_W: String,
    pub home_league_D: String,
    pub home_league_L: String,
    pub home_league_GF: String,
    pub home_league_GA: String,
    pub home_league_PTS: String,
    pub away_league_position: String,
    pub away_league_payed: String,
    pub away_league_W: String,
    pub away_league_D: String,
    pub away_league_L: String,
    pub away_league_GF: String,
    pub away_league_GA: String,
    pub away_league_PTS: String,
    pub league_round: String,
    pub team_badge: String,
    pub fk_stage_key: String,
    pub stage_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Countries,
    Leagues,
    Teams,
    Standings,
}

impl ResourceKind {
    pub fn ttl(self, ttls: &TtlConfig) -> TtlMs {
        match self {
            ResourceKind::Countries => ttls.countries,
            ResourceKind::Leagues => ttls.leagues,
            ResourceKind::Teams => ttls.teams,
            ResourceKind::Standings => ttls.standings,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Countries => "countries",
            ResourceKind::Leagues => "leagues",
            ResourceKind::Teams => "teams",
            ResourceKind::Standings => "standings",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one cached upstream response
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Countries,
    Leagues { country_id: String },
    Teams { league_id: String },
    Standings { league_id: String },
}

impl CacheKey {
    pub fn leagues(country_id: impl Into<String>) -> Self {
        CacheKey::Leagues {
            country_id: country_id.into(),
        }
    }

    pub fn teams(league_id: impl Into<String>) -> Self {
        CacheKey::Teams {
            league_id: league_id.into(),
        }
    }

    pub fn standings(league_id: impl Into<String>) -> Self {
        CacheKey::Standings {
            league_id: league_id.into(),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            CacheKey::Countries => ResourceKind::Countries,
            CacheKey::Leagues { .. } => ResourceKind::Leagues,
            CacheKey::Teams { .. } => ResourceKind::Teams,
            CacheKey::Standings { .. } => ResourceKind::Standings,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Countries => f.write_str("countries"),
            CacheKey::Leagues { country_id } => write!(f, "leagues_{}", country_id),
            CacheKey::Teams { league_id } => write!(f, "teams_{}", league_id),
            CacheKey::Standings { league_id } => write!(f, "standings_{}", league_id),
        }
    }
}

/// Tagged cache value, one variant per resource kind
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CachedPayload {
    Countries(Vec<Country>),
    Leagues(Vec<League>),
    Teams(Vec<Team>),
    Standings(Vec<Standing>),
}

impl CachedPayload {
    pub fn kind(&self) -> ResourceKind {
        match self {
            CachedPayload::Countries(_) => ResourceKind::Countries,
            CachedPayload::Leagues(_) => ResourceKind::Leagues,
            CachedPayload::Teams(_) => ResourceKind::Teams,
            CachedPayload::Standings(_) => ResourceKind::Standings,
        }
    }
}

/// A record type that can travel through the shared cache
pub trait Resource: Clone + Send + Sync + 'static {
    const KIND: ResourceKind;

    fn into_payload(records: Vec<Self>) -> CachedPayload;

    /// Returns `None` when the payload belongs to another kind
    fn from_payload(payload: CachedPayload) -> Option<Vec<Self>>;
}

macro_rules! impl_resource {
    ($ty:ty, $variant:ident) => {
        impl Resource for $ty {
            const KIND: ResourceKind = ResourceKind::$variant;

            fn into_payload(records: Vec<Self>) -> CachedPayload {
                CachedPayload::$variant(records)
            }

            fn from_payload(payload: CachedPayload) -> Option<Vec<Self>> {
                match payload {
                    CachedPayload::$variant(records) => Some(records),
                    _ => None,
                }
            }
        }
    };
}

impl_resource!(Country, Countries);
impl_resource!(League, Leagues);
impl_resource!(Team, Teams);
impl_resource!(Standing, Standings);
