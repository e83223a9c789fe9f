//! Tenant and tenant-link facade.

use fishdesk_core::FishdeskResult;
use fishdesk_core::models::linked_tenant::{CreateTenantLink, LinkKey, LinkedTenant};
use fishdesk_core::models::tenant::{CreateTenant, Tenant, TenantWithMembers, UpdateTenant};
use fishdesk_core::query::{ListQuery, Page};
use fishdesk_core::repository::{MemberSource, TenantLinkRepository, TenantRepository};
use tracing::{debug, info};

use crate::config::{Latency, ServiceConfig, commit, simulate};

/// Tenant operations with simulated round-trip latency.
///
/// Mutations run on a detached task and commit even if the caller stops
/// waiting for them.
#[derive(Debug, Clone)]
pub struct TenantService<B> {
    backend: B,
    latency: Latency,
    synthesize_members: bool,
}

impl<B> TenantService<B>
where
    B: TenantRepository + TenantLinkRepository + MemberSource + Clone + Send + Sync + 'static,
{
    pub fn new(backend: B, config: &ServiceConfig) -> Self {
        Self {
            backend,
            latency: config.effective_latency(),
            synthesize_members: config.synthesize_members,
        }
    }

    // -- Tenants ----------------------------------------------------------

    pub async fn list_tenants(&self, query: ListQuery) -> FishdeskResult<Page<Tenant>> {
        simulate(self.latency.list_ms).await;
        self.backend.list_tenants(query).await
    }

    pub async fn get_tenant(&self, id: &str) -> FishdeskResult<Option<Tenant>> {
        simulate(self.latency.read_ms).await;
        self.backend.get_tenant(id).await
    }

    /// Create a tenant; the backend assigns its id.
    pub async fn create_tenant(
        &self,
        name: &str,
        address: Option<&str>,
    ) -> FishdeskResult<Tenant> {
        let backend = self.backend.clone();
        let input = CreateTenant {
            name: name.to_string(),
            address: address.map(str::to_string),
        };
        let tenant = commit(self.latency.tenant_create_ms, async move {
            backend.create_tenant(input).await
        })
        .await?;
        info!(tenant_id = %tenant.id, "Tenant created");
        Ok(tenant)
    }

    pub async fn update_tenant(
        &self,
        id: &str,
        name: &str,
        address: &str,
    ) -> FishdeskResult<Option<Tenant>> {
        let backend = self.backend.clone();
        let id = id.to_string();
        let input = UpdateTenant {
            name: name.to_string(),
            address: address.to_string(),
        };
        commit(self.latency.write_ms, async move {
            backend.update_tenant(&id, input).await
        })
        .await
    }

    /// The tenant and its members.
    ///
    /// With member synthesis enabled, a tenant without members first
    /// receives a deterministic synthetic set; later calls return the
    /// same members. Synthesized members are kept even if the caller
    /// stops waiting.
    pub async fn get_tenant_with_members(&self, id: &str) -> FishdeskResult<TenantWithMembers> {
        let backend = self.backend.clone();
        let id = id.to_string();
        let synthesize = self.synthesize_members;
        commit(self.latency.list_ms, async move {
            if synthesize {
                match backend.get_tenant(&id).await? {
                    Some(tenant) => {
                        let created = backend.ensure_members(&tenant).await?;
                        debug!(tenant_id = %id, created, "Ensured tenant members");
                    }
                    None => return Ok(TenantWithMembers::missing()),
                }
            }
            backend.get_tenant_with_members(&id).await
        })
        .await
    }

    // -- Links ------------------------------------------------------------

    pub async fn list_linked_tenants(&self, tenant_id: &str) -> FishdeskResult<Vec<LinkedTenant>> {
        simulate(self.latency.read_ms).await;
        self.backend.list_links(tenant_id).await
    }

    /// Create or overwrite the link for the pair.
    ///
    /// `None` when the linked tenant does not exist.
    pub async fn create_tenant_link(
        &self,
        input: CreateTenantLink,
    ) -> FishdeskResult<Option<LinkedTenant>> {
        let backend = self.backend.clone();
        commit(self.latency.write_ms, async move { backend.upsert_link(input).await }).await
    }

    /// Like [`create_tenant_link`](Self::create_tenant_link), but fails
    /// with `AlreadyExists` instead of overwriting.
    pub async fn create_tenant_link_exclusive(
        &self,
        input: CreateTenantLink,
    ) -> FishdeskResult<Option<LinkedTenant>> {
        let backend = self.backend.clone();
        commit(self.latency.write_ms, async move { backend.create_link(input).await }).await
    }

    /// Flip the link's realtime flag, returning the new value.
    pub async fn update_tenant_link(
        &self,
        tenant_id: &str,
        linked_tenant_id: &str,
    ) -> FishdeskResult<Option<bool>> {
        let backend = self.backend.clone();
        let key = LinkKey::new(tenant_id, linked_tenant_id);
        commit(self.latency.mutate_ms, async move {
            backend.toggle_link_realtime(&key).await
        })
        .await
    }

    pub async fn delete_tenant_link(
        &self,
        tenant_id: &str,
        linked_tenant_id: &str,
    ) -> FishdeskResult<bool> {
        let backend = self.backend.clone();
        let key = LinkKey::new(tenant_id, linked_tenant_id);
        commit(self.latency.mutate_ms, async move { backend.delete_link(&key).await }).await
    }
}
