use crate::planes::control::operation::ControlOperations;
use crate::ports::PayloadStore;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

/// Owns the shared cache handle and the offline flag
///
/// Cloning is cheap: every clone points at the same store and the same flag, so
/// the data plane and the HTTP layer observe one another's changes.
#[derive(Clone)]
pub struct CacheControl {
    store: PayloadStore,
    offline: Arc<AtomicBool>,
}

impl CacheControl {
    pub fn new(store: PayloadStore) -> Self {
        Self {
            store,
            offline: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn store(&self) -> &PayloadStore {
        &self.store
    }
}

impl std::fmt::Debug for CacheControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheControl")
            .field("store", &"<dyn CacheStore>")
            .field("offline", &self.is_offline_mode())
            .finish()
    }
}

#[async_trait]
impl ControlOperations for CacheControl {
    fn set_offline_mode(&self, enabled: bool) {
        self.offline.store(enabled, Ordering::SeqCst);
        info!(
            "Offline mode {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    fn is_offline_mode(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    async fn clear_cache(&self) {
        self.store.clear().await;
        info!("All cache cleared");
    }

    async fn evict_expired(&self) -> usize {
        let removed = self.store.evict_expired().await;
        if removed > 0 {
            info!("Evicted {} expired cache entries", removed);
        }
        removed
    }

    async fn cache_size(&self) -> usize {
        self.store.size().await
    }
}
