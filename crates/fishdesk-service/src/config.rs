//! Service facade configuration.

use std::time::Duration;

use fishdesk_core::{FishdeskError, FishdeskResult};
use serde::Deserialize;
use tracing::error;

/// Simulated round-trip delay per kind of call, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Latency {
    /// Single-record reads (tenant, account, linked tenants).
    pub read_ms: u64,
    /// Tenant listing and tenant-with-members.
    pub list_ms: u64,
    /// Tenant updates and link creation.
    pub write_ms: u64,
    /// Link toggle/delete and account field updates.
    pub mutate_ms: u64,
    pub tenant_create_ms: u64,
    pub account_create_ms: u64,
    pub decrypt_ms: u64,
    pub dashboard_stats_ms: u64,
    pub tenant_stats_ms: u64,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            read_ms: 200,
            list_ms: 300,
            write_ms: 300,
            mutate_ms: 200,
            tenant_create_ms: 400,
            account_create_ms: 300,
            decrypt_ms: 100,
            dashboard_stats_ms: 500,
            tenant_stats_ms: 300,
        }
    }
}

impl Latency {
    /// No delay anywhere.
    pub const fn none() -> Self {
        Self {
            read_ms: 0,
            list_ms: 0,
            write_ms: 0,
            mutate_ms: 0,
            tenant_create_ms: 0,
            account_create_ms: 0,
            decrypt_ms: 0,
            dashboard_stats_ms: 0,
            tenant_stats_ms: 0,
        }
    }
}

/// Configuration shared by the service facades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Apply [`Latency`] before each backend call.
    pub simulate_latency: bool,
    /// Synthesize members for tenants that have none.
    pub synthesize_members: bool,
    pub latency: Latency,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            synthesize_members: true,
            latency: Latency::default(),
        }
    }
}

impl ServiceConfig {
    /// The latency profile in force, honoring `simulate_latency`.
    pub fn effective_latency(&self) -> Latency {
        if self.simulate_latency {
            self.latency
        } else {
            Latency::none()
        }
    }
}

/// Suspend for `ms` milliseconds; zero returns immediately.
pub(crate) async fn simulate(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// Run a mutation on its own task after `ms` milliseconds.
///
/// The task is detached from the caller: dropping the returned future
/// stops the wait for the result, not the mutation itself.
pub(crate) async fn commit<T, F>(ms: u64, mutation: F) -> FishdeskResult<T>
where
    T: Send + 'static,
    F: Future<Output = FishdeskResult<T>> + Send + 'static,
{
    let task = tokio::spawn(async move {
        simulate(ms).await;
        mutation.await
    });
    task.await.map_err(|e| {
        error!(error = %e, "Mutation task did not complete");
        FishdeskError::Internal(format!("mutation task failed: {e}"))
    })?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_simulation_zeroes_latency() {
        let config = ServiceConfig {
            simulate_latency: false,
            ..Default::default()
        };
        assert_eq!(config.effective_latency(), Latency::none());
        assert_eq!(
            ServiceConfig::default().effective_latency().tenant_create_ms,
            400
        );
    }

    #[test]
    fn partial_latency_keeps_defaults() {
        let latency: Latency = serde_json::from_str(r#"{"read_ms": 5}"#).unwrap();
        assert_eq!(latency.read_ms, 5);
        assert_eq!(latency.dashboard_stats_ms, 500);
    }
}
