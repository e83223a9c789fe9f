//! Dashboard and per-tenant statistics facade.

use fishdesk_core::FishdeskResult;
use fishdesk_core::models::stats::{DashboardStats, TenantStats};
use fishdesk_core::repository::StatisticsRepository;

use crate::config::{Latency, ServiceConfig, simulate};

#[derive(Debug, Clone)]
pub struct StatisticsService<B> {
    backend: B,
    latency: Latency,
}

impl<B: StatisticsRepository> StatisticsService<B> {
    pub fn new(backend: B, config: &ServiceConfig) -> Self {
        Self {
            backend,
            latency: config.effective_latency(),
        }
    }

    pub async fn dashboard_stats(&self) -> FishdeskResult<DashboardStats> {
        simulate(self.latency.dashboard_stats_ms).await;
        self.backend.dashboard_stats().await
    }

    pub async fn tenant_stats(&self, tenant_id: &str) -> FishdeskResult<TenantStats> {
        simulate(self.latency.tenant_stats_ms).await;
        self.backend.tenant_stats(tenant_id).await
    }
}
