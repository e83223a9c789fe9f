//! Backend trait definitions for data access abstraction.
//!
//! All operations are async. Absent records are reported as `Ok(None)`
//! (or `false` for deletes); `Err` is reserved for faults of the backend
//! itself, such as a failed remote call.
//!
//! Method names are unique across the traits so a single backend type
//! can implement all of them without call-site ambiguity.

use crate::error::FishdeskResult;
use crate::models::{
    account::{Account, CreateAccount},
    linked_tenant::{CreateTenantLink, LinkKey, LinkedTenant},
    stats::{DashboardStats, TenantStats},
    tenant::{CreateTenant, Tenant, TenantWithMembers, UpdateTenant},
};
use crate::query::{ListQuery, Page};

// ---------------------------------------------------------------------------
// Tenants
// ---------------------------------------------------------------------------

pub trait TenantRepository: Send + Sync {
    fn list_tenants(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = FishdeskResult<Page<Tenant>>> + Send;
    fn get_tenant(&self, id: &str) -> impl Future<Output = FishdeskResult<Option<Tenant>>> + Send;
    /// The backend assigns a fresh, never-reused id.
    fn create_tenant(&self, input: CreateTenant)
    -> impl Future<Output = FishdeskResult<Tenant>> + Send;
    /// Replace name and address and refresh `updated_at`.
    fn update_tenant(
        &self,
        id: &str,
        input: UpdateTenant,
    ) -> impl Future<Output = FishdeskResult<Option<Tenant>>> + Send;
    /// Pure read of a tenant and its current members.
    fn get_tenant_with_members(
        &self,
        id: &str,
    ) -> impl Future<Output = FishdeskResult<TenantWithMembers>> + Send;
}

// ---------------------------------------------------------------------------
// Tenant links
// ---------------------------------------------------------------------------

pub trait TenantLinkRepository: Send + Sync {
    /// All links whose source is `tenant_id`.
    fn list_links(
        &self,
        tenant_id: &str,
    ) -> impl Future<Output = FishdeskResult<Vec<LinkedTenant>>> + Send;
    fn get_link(
        &self,
        key: &LinkKey,
    ) -> impl Future<Output = FishdeskResult<Option<LinkedTenant>>> + Send;
    /// Create or overwrite the link for the pair.
    ///
    /// Returns `None` when the linked tenant does not exist.
    fn upsert_link(
        &self,
        input: CreateTenantLink,
    ) -> impl Future<Output = FishdeskResult<Option<LinkedTenant>>> + Send;
    /// Create-only variant of [`upsert_link`](Self::upsert_link).
    ///
    /// Fails with `AlreadyExists` when the pair is already linked.
    fn create_link(
        &self,
        input: CreateTenantLink,
    ) -> impl Future<Output = FishdeskResult<Option<LinkedTenant>>> + Send;
    /// Flip `realtime` and return its new value.
    fn toggle_link_realtime(
        &self,
        key: &LinkKey,
    ) -> impl Future<Output = FishdeskResult<Option<bool>>> + Send;
    /// Returns whether a link was removed.
    fn delete_link(&self, key: &LinkKey) -> impl Future<Output = FishdeskResult<bool>> + Send;
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

pub trait AccountRepository: Send + Sync {
    fn get_account(&self, id: &str)
    -> impl Future<Output = FishdeskResult<Option<Account>>> + Send;
    /// Nickname defaults to the name; the password is a placeholder
    /// encoded the same way as [`update_account_password`](Self::update_account_password).
    fn create_account(
        &self,
        input: CreateAccount,
    ) -> impl Future<Output = FishdeskResult<Account>> + Send;
    fn update_account_nickname(
        &self,
        id: &str,
        nickname: &str,
    ) -> impl Future<Output = FishdeskResult<Option<Account>>> + Send;
    /// `password` is plaintext; the backend encodes or encrypts it.
    fn update_account_password(
        &self,
        id: &str,
        password: &str,
    ) -> impl Future<Output = FishdeskResult<Option<Account>>> + Send;
    fn list_accounts_by_tenant(
        &self,
        tenant_id: &str,
    ) -> impl Future<Output = FishdeskResult<Vec<Account>>> + Send;
}

// ---------------------------------------------------------------------------
// Member provisioning & statistics
// ---------------------------------------------------------------------------

/// Generate-if-absent step kept apart from the member read.
pub trait MemberSource: Send + Sync {
    /// Make sure `tenant` has members, returning how many were created.
    ///
    /// Backends that own real membership data return `Ok(0)`.
    fn ensure_members(&self, tenant: &Tenant) -> impl Future<Output = FishdeskResult<usize>> + Send;
}

pub trait StatisticsRepository: Send + Sync {
    fn dashboard_stats(&self) -> impl Future<Output = FishdeskResult<DashboardStats>> + Send;
    fn tenant_stats(
        &self,
        tenant_id: &str,
    ) -> impl Future<Output = FishdeskResult<TenantStats>> + Send;
}

/// Everything a complete backend provides.
pub trait EntityBackend:
    TenantRepository + TenantLinkRepository + AccountRepository + MemberSource + StatisticsRepository
{
}

impl<B> EntityBackend for B where
    B: TenantRepository
        + TenantLinkRepository
        + AccountRepository
        + MemberSource
        + StatisticsRepository
{
}
