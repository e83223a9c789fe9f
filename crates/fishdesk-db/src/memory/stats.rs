//! Derived statistics for the in-memory backend.
//!
//! There is no accident data in memory; accident counters are derived
//! from the numeric part of the tenant id.

use std::sync::LazyLock;

use fishdesk_core::FishdeskResult;
use fishdesk_core::models::stats::{DashboardStats, TenantStats};
use fishdesk_core::repository::StatisticsRepository;
use regex::Regex;
use tracing::debug;

use super::MemoryBackend;

static TENANT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tenant-(\d+)-").expect("valid tenant number pattern"));

const DEFAULT_TENANT_NUMBER: u64 = 5;

fn tenant_number(tenant_id: &str) -> u64 {
    TENANT_NUMBER
        .captures(tenant_id)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(DEFAULT_TENANT_NUMBER)
}

/// Counters for `tenant_id`, a pure function of its id.
///
/// Ids containing `tenant-{n}-` use `n`; every other id uses 5.
pub fn derived_tenant_stats(tenant_id: &str) -> TenantStats {
    let n = tenant_number(tenant_id);
    TenantStats {
        fisher_user_count: n.saturating_mul(8).saturating_add(15),
        open_accident_count: n / 2,
        total_accident_count: n.saturating_mul(3).saturating_add(10),
    }
}

impl StatisticsRepository for MemoryBackend {
    async fn dashboard_stats(&self) -> FishdeskResult<DashboardStats> {
        let tenants = self.store.tenants.get_all();
        let accounts = self.store.accounts.get_all();

        let stats = DashboardStats {
            total_tenants: tenants.len() as u64,
            total_fisher_users: accounts.len() as u64,
            total_devices: accounts.iter().map(|a| a.device_count() as u64).sum(),
            open_accidents: tenants
                .iter()
                .map(|t| derived_tenant_stats(&t.id).open_accident_count)
                .sum(),
        };
        debug!(?stats, "Computed dashboard statistics");
        Ok(stats)
    }

    async fn tenant_stats(&self, tenant_id: &str) -> FishdeskResult<TenantStats> {
        Ok(derived_tenant_stats(tenant_id))
    }
}
