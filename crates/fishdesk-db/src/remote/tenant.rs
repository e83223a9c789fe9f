//! Remote implementation of [`TenantRepository`].

use fishdesk_core::FishdeskResult;
use fishdesk_core::models::account::Account;
use fishdesk_core::models::tenant::{CreateTenant, Tenant, TenantWithMembers, UpdateTenant};
use fishdesk_core::query::{self, ListQuery, Page};
use fishdesk_core::repository::TenantRepository;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::documents::{
    CREATE_TENANT, GET_TENANT_BY_ID, GET_TENANT_WITH_MEMBERS, GET_TENANTS, UPDATE_TENANT,
};
use super::{RemoteBackend, compact};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TenantConnection {
    #[serde(default)]
    tenants: Option<Vec<Option<Tenant>>>,
    #[serde(default)]
    next_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TenantWithMembersRow {
    #[serde(flatten)]
    tenant: Tenant,
    #[serde(default)]
    members: Option<Vec<Option<Account>>>,
}

impl RemoteBackend {
    pub(super) async fn fetch_tenant_with_members(
        &self,
        id: &str,
    ) -> FishdeskResult<Option<TenantWithMembersRow>> {
        Ok(self.call(&GET_TENANT_WITH_MEMBERS, json!({ "id": id })).await?)
    }
}

impl TenantWithMembersRow {
    pub(super) fn into_members(self) -> Vec<Account> {
        compact(self.members)
    }
}

impl TenantRepository for RemoteBackend {
    async fn list_tenants(&self, query: ListQuery) -> FishdeskResult<Page<Tenant>> {
        let variables = json!({
            "limit": query.effective_limit(),
            "nextToken": query.next_token,
            "nameCont": query.name_cont,
        });
        let Some(connection) = self
            .call::<TenantConnection>(&GET_TENANTS, variables)
            .await?
        else {
            return Ok(Page::empty());
        };

        let mut items = compact(connection.tenants);
        if query.exclude_test {
            items.retain(|t| !query::is_test_entity(t));
        }
        debug!(
            returned = items.len(),
            next_token = ?connection.next_token,
            "Listed remote tenants"
        );
        Ok(Page {
            items,
            next_token: connection.next_token,
        })
    }

    async fn get_tenant(&self, id: &str) -> FishdeskResult<Option<Tenant>> {
        Ok(self.call(&GET_TENANT_BY_ID, json!({ "id": id })).await?)
    }

    async fn create_tenant(&self, input: CreateTenant) -> FishdeskResult<Tenant> {
        let variables = json!({ "name": input.name, "address": input.address });
        Ok(self.call_required(&CREATE_TENANT, variables).await?)
    }

    async fn update_tenant(&self, id: &str, input: UpdateTenant) -> FishdeskResult<Option<Tenant>> {
        let variables = json!({ "id": id, "name": input.name, "address": input.address });
        Ok(self.call(&UPDATE_TENANT, variables).await?)
    }

    async fn get_tenant_with_members(&self, id: &str) -> FishdeskResult<TenantWithMembers> {
        let Some(row) = self.fetch_tenant_with_members(id).await? else {
            return Ok(TenantWithMembers::missing());
        };
        let members = compact(row.members);
        Ok(TenantWithMembers {
            tenant: Some(row.tenant),
            members,
        })
    }
}
