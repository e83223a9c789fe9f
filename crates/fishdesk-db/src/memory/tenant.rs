//! In-memory implementation of [`TenantRepository`].

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use fishdesk_core::FishdeskResult;
use fishdesk_core::models::tenant::{CreateTenant, Tenant, TenantWithMembers, UpdateTenant};
use fishdesk_core::query::{self, ListQuery, Page};
use fishdesk_core::repository::TenantRepository;
use tracing::{debug, info};

use super::MemoryBackend;
use crate::rng::SeededRng;

const TENANT_ID_SUFFIX_LEN: usize = 9;

static TENANT_ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// `tenant-new-{epoch ms}-{random base36}`.
///
/// The suffix stream mixes OS randomness with a process-wide sequence,
/// so two ids drawn in the same millisecond still differ.
fn new_tenant_id(now: DateTime<Utc>) -> String {
    let sequence = TENANT_ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let mut rng = SeededRng::new(rand::random::<u64>() ^ sequence.rotate_left(32));
    format!(
        "tenant-new-{}-{}",
        now.timestamp_millis(),
        rng.base36(TENANT_ID_SUFFIX_LEN)
    )
}

impl TenantRepository for MemoryBackend {
    async fn list_tenants(&self, query: ListQuery) -> FishdeskResult<Page<Tenant>> {
        let page = query::list(self.store.tenants.get_all(), &query);
        debug!(
            returned = page.items.len(),
            next_token = ?page.next_token,
            "Listed tenants"
        );
        Ok(page)
    }

    async fn get_tenant(&self, id: &str) -> FishdeskResult<Option<Tenant>> {
        Ok(self.store.tenants.get(id))
    }

    async fn create_tenant(&self, input: CreateTenant) -> FishdeskResult<Tenant> {
        let now = Utc::now();
        let address = input.address.unwrap_or_default();

        // Redraw until the id is free; the insert itself is the check.
        loop {
            let tenant = Tenant {
                id: new_tenant_id(now),
                name: input.name.clone(),
                address: address.clone(),
                created_at: Some(now),
                updated_at: Some(now),
            };
            if self.store.tenants.insert_if_absent(tenant.clone()) {
                info!(tenant_id = %tenant.id, "Created tenant");
                return Ok(tenant);
            }
            debug!(tenant_id = %tenant.id, "Tenant id collision, redrawing");
        }
    }

    async fn update_tenant(&self, id: &str, input: UpdateTenant) -> FishdeskResult<Option<Tenant>> {
        let now = Utc::now();
        let updated = self.store.tenants.update(id, |tenant| {
            tenant.name = input.name;
            tenant.address = input.address;
            tenant.updated_at = Some(now);
        });
        if updated.is_none() {
            debug!(tenant_id = id, "Update of unknown tenant");
        }
        Ok(updated)
    }

    async fn get_tenant_with_members(&self, id: &str) -> FishdeskResult<TenantWithMembers> {
        let Some(tenant) = self.store.tenants.get(id) else {
            return Ok(TenantWithMembers::missing());
        };
        let members = self.store.accounts.find(|a| a.belongs_to(id));
        Ok(TenantWithMembers {
            tenant: Some(tenant),
            members,
        })
    }
}
