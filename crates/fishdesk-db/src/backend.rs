//! Configuration-selected backend.
//!
//! [`Backend`] picks the in-memory or the remote implementation once,
//! at construction, and forwards every trait call to it.

use std::sync::Arc;

use fishdesk_auth::SharedCodec;
use fishdesk_core::FishdeskResult;
use fishdesk_core::models::account::{Account, CreateAccount};
use fishdesk_core::models::linked_tenant::{CreateTenantLink, LinkKey, LinkedTenant};
use fishdesk_core::models::stats::{DashboardStats, TenantStats};
use fishdesk_core::models::tenant::{CreateTenant, Tenant, TenantWithMembers, UpdateTenant};
use fishdesk_core::query::{ListQuery, Page};
use fishdesk_core::repository::{
    AccountRepository, MemberSource, StatisticsRepository, TenantLinkRepository,
    TenantRepository,
};
use tracing::info;

use crate::config::{BackendConfig, BackendMode, SeedConfig};
use crate::error::DbError;
use crate::memory::{MemoryBackend, MemoryStore};
use crate::remote::RemoteBackend;

#[derive(Debug, Clone)]
pub enum Backend {
    Memory(MemoryBackend),
    Remote(RemoteBackend),
}

impl Backend {
    /// Build the backend selected by `config.mode`.
    ///
    /// Memory mode creates and seeds a fresh store.
    pub fn from_config(
        config: &BackendConfig,
        seed: &SeedConfig,
        codec: SharedCodec,
    ) -> Result<Self, DbError> {
        let backend = match config.mode {
            BackendMode::Memory => {
                let store = Arc::new(MemoryStore::new());
                store.seed(seed);
                Self::Memory(MemoryBackend::new(store, codec, seed.rng_seed))
            }
            BackendMode::Remote => Self::Remote(RemoteBackend::new(config)?),
        };
        info!(mode = ?backend.mode(), "Entity backend ready");
        Ok(backend)
    }

    pub fn mode(&self) -> BackendMode {
        match self {
            Self::Memory(_) => BackendMode::Memory,
            Self::Remote(_) => BackendMode::Remote,
        }
    }
}

macro_rules! delegate {
    ($self:ident, $backend:ident => $call:expr) => {
        match $self {
            Backend::Memory($backend) => $call.await,
            Backend::Remote($backend) => $call.await,
        }
    };
}

impl TenantRepository for Backend {
    async fn list_tenants(&self, query: ListQuery) -> FishdeskResult<Page<Tenant>> {
        delegate!(self, b => b.list_tenants(query))
    }

    async fn get_tenant(&self, id: &str) -> FishdeskResult<Option<Tenant>> {
        delegate!(self, b => b.get_tenant(id))
    }

    async fn create_tenant(&self, input: CreateTenant) -> FishdeskResult<Tenant> {
        delegate!(self, b => b.create_tenant(input))
    }

    async fn update_tenant(&self, id: &str, input: UpdateTenant) -> FishdeskResult<Option<Tenant>> {
        delegate!(self, b => b.update_tenant(id, input))
    }

    async fn get_tenant_with_members(&self, id: &str) -> FishdeskResult<TenantWithMembers> {
        delegate!(self, b => b.get_tenant_with_members(id))
    }
}

impl TenantLinkRepository for Backend {
    async fn list_links(&self, tenant_id: &str) -> FishdeskResult<Vec<LinkedTenant>> {
        delegate!(self, b => b.list_links(tenant_id))
    }

    async fn get_link(&self, key: &LinkKey) -> FishdeskResult<Option<LinkedTenant>> {
        delegate!(self, b => b.get_link(key))
    }

    async fn upsert_link(&self, input: CreateTenantLink) -> FishdeskResult<Option<LinkedTenant>> {
        delegate!(self, b => b.upsert_link(input))
    }

    async fn create_link(&self, input: CreateTenantLink) -> FishdeskResult<Option<LinkedTenant>> {
        delegate!(self, b => b.create_link(input))
    }

    async fn toggle_link_realtime(&self, key: &LinkKey) -> FishdeskResult<Option<bool>> {
        delegate!(self, b => b.toggle_link_realtime(key))
    }

    async fn delete_link(&self, key: &LinkKey) -> FishdeskResult<bool> {
        delegate!(self, b => b.delete_link(key))
    }
}

impl AccountRepository for Backend {
    async fn get_account(&self, id: &str) -> FishdeskResult<Option<Account>> {
        delegate!(self, b => b.get_account(id))
    }

    async fn create_account(&self, input: CreateAccount) -> FishdeskResult<Account> {
        delegate!(self, b => b.create_account(input))
    }

    async fn update_account_nickname(
        &self,
        id: &str,
        nickname: &str,
    ) -> FishdeskResult<Option<Account>> {
        delegate!(self, b => b.update_account_nickname(id, nickname))
    }

    async fn update_account_password(
        &self,
        id: &str,
        password: &str,
    ) -> FishdeskResult<Option<Account>> {
        delegate!(self, b => b.update_account_password(id, password))
    }

    async fn list_accounts_by_tenant(&self, tenant_id: &str) -> FishdeskResult<Vec<Account>> {
        delegate!(self, b => b.list_accounts_by_tenant(tenant_id))
    }
}

impl MemberSource for Backend {
    async fn ensure_members(&self, tenant: &Tenant) -> FishdeskResult<usize> {
        delegate!(self, b => b.ensure_members(tenant))
    }
}

impl StatisticsRepository for Backend {
    async fn dashboard_stats(&self) -> FishdeskResult<DashboardStats> {
        delegate!(self, b => b.dashboard_stats())
    }

    async fn tenant_stats(&self, tenant_id: &str) -> FishdeskResult<TenantStats> {
        delegate!(self, b => b.tenant_stats(tenant_id))
    }
}
