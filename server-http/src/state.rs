use football::domain::CachedPayload;
use football::planes::control::CacheControl;
use football::planes::data::FootballOperationsService;
use football::ports::{FootballUpstream, PayloadStore};
use shared::config::{Config, TtlConfig};
use std::sync::Arc;
use storage_engine::TtlCache;
use upstream_client::ApiFootballClient;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub football: Arc<FootballOperationsService>,
    pub control: CacheControl,
}

impl AppState {
    /// Wire the apifootball.com client described by `config`
    pub fn from_config(config: &Config) -> shared::Result<Self> {
        let upstream = Arc::new(ApiFootballClient::new(&config.upstream)?);
        Ok(Self::new(upstream, config.ttl))
    }

    pub fn new(upstream: Arc<dyn FootballUpstream>, ttls: TtlConfig) -> Self {
        let store: PayloadStore = Arc::new(TtlCache::<String, CachedPayload>::new());
        let control = CacheControl::new(store);
        let football = Arc::new(FootballOperationsService::new(
            control.clone(),
            upstream,
            ttls,
        ));

        tracing::info!("Cache initialized with TTLs {:?}", ttls);

        Self { football, control }
    }
}
