use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use folio_core_health_contracts::{HealthFeatureService, HealthStatus};
use folio_extern_contracts::backend::BackendApiService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Backend> {
    backend: Backend,
    config: HealthFeatureConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: Instant,
}

impl<Backend> HealthFeatureServiceImpl<Backend> {
    pub fn new(backend: Backend, config: HealthFeatureConfig) -> Self {
        Self {
            backend,
            config,
            state: Default::default(),
        }
    }
}

impl<Backend> HealthFeatureService for HealthFeatureServiceImpl<Backend>
where
    Backend: BackendApiService,
{
    async fn get_status(&self) -> HealthStatus {
        let is_fresh = |cached: &&CachedStatus| cached.timestamp.elapsed() < self.config.cache_ttl;

        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard.as_ref().filter(is_fresh) {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard.as_ref().filter(is_fresh) {
            return cached.status;
        }

        let backend = self
            .backend
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping backend api: {err:#}"))
            .is_ok();

        let status = HealthStatus { backend };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: Instant::now(),
            })
            .status
    }
}
