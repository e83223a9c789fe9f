//! In-memory implementation of [`TenantLinkRepository`].

use chrono::Utc;
use fishdesk_core::error::{FishdeskError, FishdeskResult};
use fishdesk_core::models::linked_tenant::{CreateTenantLink, LinkKey, LinkedTenant};
use fishdesk_core::repository::TenantLinkRepository;
use tracing::{debug, info};

use super::MemoryBackend;

impl MemoryBackend {
    /// Build the link record, or `None` if the linked tenant is unknown.
    fn build_link(&self, input: CreateTenantLink) -> Option<LinkedTenant> {
        let Some(target) = self.store.tenants.get(&input.linked_tenant_id) else {
            debug!(linked_tenant_id = %input.linked_tenant_id, "Link target does not exist");
            return None;
        };
        Some(input.into_link(&target, Utc::now()))
    }
}

impl TenantLinkRepository for MemoryBackend {
    async fn list_links(&self, tenant_id: &str) -> FishdeskResult<Vec<LinkedTenant>> {
        Ok(self.store.links.find(|l| l.tenant_id == tenant_id))
    }

    async fn get_link(&self, key: &LinkKey) -> FishdeskResult<Option<LinkedTenant>> {
        Ok(self.store.links.get(&key.id()))
    }

    async fn upsert_link(&self, input: CreateTenantLink) -> FishdeskResult<Option<LinkedTenant>> {
        let Some(link) = self.build_link(input) else {
            return Ok(None);
        };
        let replaced = self.store.links.put(link.clone()).is_some();
        info!(link_id = %link.id, replaced, realtime = link.realtime, "Stored tenant link");
        Ok(Some(link))
    }

    async fn create_link(&self, input: CreateTenantLink) -> FishdeskResult<Option<LinkedTenant>> {
        let Some(link) = self.build_link(input) else {
            return Ok(None);
        };
        if !self.store.links.insert_if_absent(link.clone()) {
            return Err(FishdeskError::AlreadyExists {
                entity: "linked_tenant".into(),
                id: link.id,
            });
        }
        info!(link_id = %link.id, realtime = link.realtime, "Created tenant link");
        Ok(Some(link))
    }

    async fn toggle_link_realtime(&self, key: &LinkKey) -> FishdeskResult<Option<bool>> {
        let toggled = self
            .store
            .links
            .update(&key.id(), |link| link.realtime = !link.realtime)
            .map(|link| link.realtime);
        debug!(link = %key, realtime = ?toggled, "Toggled link realtime");
        Ok(toggled)
    }

    async fn delete_link(&self, key: &LinkKey) -> FishdeskResult<bool> {
        let removed = self.store.links.delete(&key.id());
        debug!(link = %key, removed, "Deleted tenant link");
        Ok(removed)
    }
}
