use async_trait::async_trait;
use dashmap::DashMap;
use football::ports::CacheStore;
use shared::TtlMs;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tracing::debug;

struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    fn new(value: V, ttl: TtlMs) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
            ttl: ttl.as_duration(),
        }
    }

    // A zero TTL is stale as soon as it is written
    fn is_expired(&self, now: Instant) -> bool {
        self.ttl.is_zero() || now.saturating_duration_since(self.inserted_at) > self.ttl
    }
}

/// DashMap-backed cache with per-entry TTL and lazy expiry
///
/// Expired entries are removed by the read that notices them or by
/// `evict_expired`; there is no capacity bound. Shard locks are released
/// before every return, so no guard outlives a call.
pub struct TtlCache<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    entries: DashMap<K, CacheEntry<V>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl<K, V> Default for TtlCache<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K, V> CacheStore<K, V> for TtlCache<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    async fn put(&self, key: K, val: V, ttl: TtlMs) {
        debug!("Cached entry with key: {:?} (TTL: {}ms)", key, ttl.0);
        self.entries.insert(key, CacheEntry::new(val, ttl));
    }

    async fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();

        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                debug!("Cache hit for key: {:?}", key);
                return Some(entry.value.clone());
            }
            Some(_) => {}
            None => {
                debug!("Cache miss for key: {:?}", key);
                return None;
            }
        }

        // Re-check under the shard lock so a concurrent fresh put survives
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired(now))
            .is_some()
        {
            debug!("Cache entry expired for key: {:?}", key);
        }
        None
    }

    async fn contains(&self, key: &K) -> bool {
        self.get(key).await.is_some()
    }

    async fn clear(&self) {
        self.entries.clear();
    }

    async fn evict_expired(&self) -> usize {
        let now = Instant::now();
        let mut removed = 0;

        self.entries.retain(|_, entry| {
            let keep = !entry.is_expired(now);
            if !keep {
                removed += 1;
            }
            keep
        });

        removed
    }

    async fn size(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V> Debug for TtlCache<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("entry_count", &self.entries.len())
            .finish()
    }
}
