#![deny(clippy::all)]

use crate::domain::{Country, League, Standing, Team};
use async_trait::async_trait;
use shared::TtlMs;

// Ports are the pluggable extension points for storage and upstream implementations

/// Port for TTL-aware key/value storage
///
/// Implementations must be safe under concurrent callers without external
/// locking, and must never hand out a value whose TTL has elapsed.
#[async_trait]
pub trait CacheStore<K, V>: Send + Sync + 'static {
    /// Store `val` under `key`, replacing any previous entry
    async fn put(&self, key: K, val: V, ttl: TtlMs);
    /// Fetch a live value; an expired entry is dropped and reported as absent
    async fn get(&self, key: &K) -> Option<V>;
    async fn contains(&self, key: &K) -> bool;
    async fn clear(&self);
    /// Drop every expired entry, returning how many were removed
    async fn evict_expired(&self) -> usize;
    /// Entry count, including expired entries that have not been touched yet
    async fn size(&self) -> usize;
}

/// Port for the remote football data source
///
/// Calls never fail: transport, decoding and remote errors are reported as an
/// empty list after being logged by the implementation.
#[async_trait]
pub trait FootballUpstream: Send + Sync + 'static {
    async fn countries(&self) -> Vec<Country>;
    async fn leagues(&self, country_id: &str) -> Vec<League>;
    async fn teams(&self, league_id: &str) -> Vec<Team>;
    async fn standings(&self, league_id: &str) -> Vec<Standing>;
}

/// The single cache instance shared by every resource kind
pub type PayloadStore = std::sync::Arc<dyn CacheStore<String, crate::domain::CachedPayload>>;
