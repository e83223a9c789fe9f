//! In-memory backend.
//!
//! [`MemoryStore`] owns the three entity stores and is constructed
//! explicitly, then shared by reference with whatever needs it.
//! [`MemoryBackend`] implements the backend traits on top of it.

mod account;
mod link;
mod members;
mod seed;
mod stats;
mod tenant;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use fishdesk_auth::SharedCodec;
use fishdesk_core::models::{account::Account, linked_tenant::LinkedTenant, tenant::Tenant};

use crate::store::EntityStore;

pub use members::synthesize_members;
pub use seed::SeedReport;
pub use stats::derived_tenant_stats;

/// Process-lifetime storage for accounts, tenants and tenant links.
#[derive(Debug)]
pub struct MemoryStore {
    pub accounts: EntityStore<Account>,
    pub tenants: EntityStore<Tenant>,
    pub links: EntityStore<LinkedTenant>,
    started_at: DateTime<Utc>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Store whose seed timestamps are relative to `started_at`.
    pub fn starting_at(started_at: DateTime<Utc>) -> Self {
        Self {
            accounts: EntityStore::new(),
            tenants: EntityStore::new(),
            links: EntityStore::new(),
            started_at,
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Backend serving every operation from a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    store: Arc<MemoryStore>,
    codec: SharedCodec,
    member_seed: u64,
}

impl MemoryBackend {
    /// `codec` encodes account passwords; `member_seed` drives member
    /// synthesis.
    pub fn new(store: Arc<MemoryStore>, codec: SharedCodec, member_seed: u64) -> Self {
        Self {
            store,
            codec,
            member_seed,
        }
    }

    pub fn store(&self) -> &Arc<MemoryStore> {
        &self.store
    }
}
