//! Backend selection and seeding configuration.

use serde::Deserialize;

/// Where entity data comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    /// Seeded in-memory store.
    #[default]
    Memory,
    /// GraphQL API.
    Remote,
}

/// Configuration for the entity backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub mode: BackendMode,
    /// GraphQL endpoint URL. Required in remote mode.
    pub graphql_endpoint: String,
    /// ID token sent as `Authorization: Bearer`. Obtaining it is the
    /// caller's concern.
    pub id_token: Option<String>,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            mode: BackendMode::Memory,
            graphql_endpoint: String::new(),
            id_token: None,
            connect_timeout_ms: 5_000,
            request_timeout_ms: 30_000,
        }
    }
}

/// Synthetic data generated for the in-memory backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Number of tenants created at startup.
    pub tenant_count: usize,
    /// How many of the first tenants receive outgoing links.
    pub linked_tenant_sources: usize,
    /// Seed for every synthetic id, count and flag.
    pub rng_seed: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            tenant_count: 100,
            linked_tenant_sources: 50,
            rng_seed: 42,
        }
    }
}
