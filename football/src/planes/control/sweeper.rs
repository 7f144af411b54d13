use crate::planes::control::{CacheControl, ControlOperations};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

/// Periodically drop expired entries that no read has touched
///
/// Lazy expiry already keeps stale values from being served; this only bounds
/// memory held by keys that are written once and never read again.
pub fn spawn_expiry_sweeper(control: CacheControl, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = control.evict_expired().await;
            debug!(
                "Expiry sweep removed {} entries, {} remain",
                removed,
                control.cache_size().await
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CachedPayload, Country};
    use crate::test_support::MemoryStore;
    use shared::TtlMs;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_sweeper_removes_expired_entries() {
        let control = CacheControl::new(Arc::new(MemoryStore::default()));
        let payload = CachedPayload::Countries(vec![Country::default()]);
        control.store().put("stale".into(), payload.clone(), TtlMs(10)).await;
        control.store().put("fresh".into(), payload, TtlMs(60_000)).await;

        let handle = spawn_expiry_sweeper(control.clone(), Duration::from_millis(25));
        tokio::time::sleep(Duration::from_millis(120)).await;
        handle.abort();

        assert_eq!(control.cache_size().await, 1);
        assert!(control.store().contains(&"fresh".to_string()).await);
    }
}
