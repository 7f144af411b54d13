use crate::domain::{CacheKey, Country, League, Resource, Standing, Team};
use crate::planes::control::{CacheControl, ControlOperations};
use crate::planes::data::operation::FootballOperations;
use crate::ports::FootballUpstream;
use async_trait::async_trait;
use shared::config::TtlConfig;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Read-through orchestration of the cache, the upstream client and the offline flag
///
/// Lookups go to the cache first. A miss is served from upstream unless offline
/// mode is on, and only non-empty upstream answers are stored.
#[derive(Clone)]
pub struct FootballOperationsService {
    control: CacheControl,
    upstream: Arc<dyn FootballUpstream>,
    ttls: TtlConfig,
}

impl FootballOperationsService {
    pub fn new(control: CacheControl, upstream: Arc<dyn FootballUpstream>, ttls: TtlConfig) -> Self {
        Self {
            control,
            upstream,
            ttls,
        }
    }

    pub fn control(&self) -> &CacheControl {
        &self.control
    }

    /// Resolve `key` from the cache, falling back to `fetch` on a miss
    ///
    /// No cache lock is held while `fetch` runs. Concurrent misses on the same
    /// key may each call upstream; the last completed store wins.
    pub async fn fetch_with_cache<R, F, Fut>(&self, key: CacheKey, fetch: F) -> Vec<R>
    where
        R: Resource,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Vec<R>> + Send,
    {
        debug_assert_eq!(key.kind(), R::KIND);
        let cache_key = key.to_string();
        let store = self.control.store();

        if let Some(payload) = store.get(&cache_key).await {
            let found = payload.kind();
            match R::from_payload(payload) {
                Some(records) => {
                    debug!("Returning {} from cache for key: {}", R::KIND, cache_key);
                    return records;
                }
                None => warn!(
                    "Cache entry {} holds {} instead of {}, treating as a miss",
                    cache_key,
                    found,
                    R::KIND
                ),
            }
        }

        if self.control.is_offline_mode() {
            warn!("Offline mode: no cached data available for {}", cache_key);
            return Vec::new();
        }

        debug!("Cache miss for key: {}, fetching from upstream", cache_key);
        let records = fetch().await;

        if records.is_empty() {
            debug!("Upstream returned no {} for {}, not caching", R::KIND, cache_key);
        } else {
            let ttl = R::KIND.ttl(&self.ttls);
            store
                .put(cache_key, R::into_payload(records.clone()), ttl)
                .await;
        }

        records
    }
}

impl std::fmt::Debug for FootballOperationsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FootballOperationsService")
            .field("control", &self.control)
            .field("ttls", &self.ttls)
            .finish()
    }
}

#[async_trait]
impl FootballOperations for FootballOperationsService {
    async fn get_countries(&self) -> Vec<Country> {
        self.fetch_with_cache(CacheKey::Countries, || self.upstream.countries())
            .await
    }

    async fn get_leagues(&self, country_id: &str) -> Vec<League> {
        self.fetch_with_cache(CacheKey::leagues(country_id), || {
            self.upstream.leagues(country_id)
        })
        .await
    }

    async fn get_teams(&self, league_id: &str) -> Vec<Team> {
        self.fetch_with_cache(CacheKey::teams(league_id), || self.upstream.teams(league_id))
            .await
    }

    async fn get_standings(&self, league_id: &str, team_name: Option<&str>) -> Vec<Standing> {
        let standings = self
            .fetch_with_cache(CacheKey::standings(league_id), || {
                self.upstream.standings(league_id)
            })
            .await;

        filter_standings(standings, team_name)
    }
}

/// Keep rows whose team name contains `team_name`, ignoring case
///
/// A missing or blank filter returns the list untouched.
pub fn filter_standings(standings: Vec<Standing>, team_name: Option<&str>) -> Vec<Standing> {
    let needle = match team_name {
        Some(needle) if !needle.trim().is_empty() => needle.to_lowercase(),
        _ => return standings,
    };

    standings
        .into_iter()
        .filter(|s| s.team_name.to_lowercase().contains(&needle))
        .collect()
}
