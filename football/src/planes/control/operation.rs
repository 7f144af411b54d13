use async_trait::async_trait;

/// Operational controls that sit beside the read path
#[async_trait]
pub trait ControlOperations: Send + Sync + 'static {
    /// Suppress (or resume) upstream calls on cache misses
    fn set_offline_mode(&self, enabled: bool);

    fn is_offline_mode(&self) -> bool;

    /// Drop every cached response; the offline flag is left untouched
    async fn clear_cache(&self);

    /// Proactively remove expired entries, returning the removed count
    async fn evict_expired(&self) -> usize;

    async fn cache_size(&self) -> usize;
}
