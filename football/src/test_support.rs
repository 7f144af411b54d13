//! In-memory doubles for the ports, used by unit tests in this crate.

use crate::domain::{CachedPayload, Country, League, Standing, Team};
use crate::ports::{CacheStore, FootballUpstream};
use async_trait::async_trait;
use shared::TtlMs;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, (CachedPayload, Instant, Duration)>>,
    puts: AtomicUsize,
}

impl MemoryStore {
    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn raw(&self, key: &str) -> Option<CachedPayload> {
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .map(|(value, _, _)| value.clone())
    }
}

fn expired(inserted_at: Instant, ttl: Duration) -> bool {
    ttl.is_zero() || inserted_at.elapsed() > ttl
}

#[async_trait]
impl CacheStore<String, CachedPayload> for MemoryStore {
    async fn put(&self, key: String, val: CachedPayload, ttl: TtlMs) {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(key, (val, Instant::now(), ttl.as_duration()));
    }

    async fn get(&self, key: &String) -> Option<CachedPayload> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some((_, at, ttl)) if expired(*at, *ttl) => {
                entries.remove(key);
                None
            }
            Some((value, _, _)) => Some(value.clone()),
            None => None,
        }
    }

    async fn contains(&self, key: &String) -> bool {
        self.get(key).await.is_some()
    }

    async fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    async fn evict_expired(&self) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|_, (_, at, ttl)| !expired(*at, *ttl));
        before - entries.len()
    }

    async fn size(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

/// Upstream double returning canned lists and counting calls per resource
#[derive(Default)]
pub struct StubUpstream {
    pub countries: Vec<Country>,
    pub leagues: Vec<League>,
    pub teams: Vec<Team>,
    pub standings: Vec<Standing>,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl StubUpstream {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl FootballUpstream for StubUpstream {
    async fn countries(&self) -> Vec<Country> {
        self.record("countries".into());
        self.countries.clone()
    }

    async fn leagues(&self, country_id: &str) -> Vec<League> {
        self.record(format!("leagues:{}", country_id));
        self.leagues.clone()
    }

    async fn teams(&self, league_id: &str) -> Vec<Team> {
        self.record(format!("teams:{}", league_id));
        self.teams.clone()
    }

    async fn standings(&self, league_id: &str) -> Vec<Standing> {
        self.record(format!("standings:{}", league_id));
        self.standings.clone()
    }
}

pub fn standing(team_name: &str, position: &str) -> Standing {
    Standing {
        league_id: "152".into(),
        league_name: "Premier League".into(),
        team_name: team_name.into(),
        overall_league_position: position.into(),
        ..Standing::default()
    }
}

pub fn team(key: &str, name: &str) -> Team {
    Team {
        team_key: key.into(),
        team_name: name.into(),
        ..Team::default()
    }
}
