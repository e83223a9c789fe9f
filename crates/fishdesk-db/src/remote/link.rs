//! Remote implementation of [`TenantLinkRepository`].
//!
//! The API has no single-link lookup or create-only mutation, so both
//! are built from `GetLinkedTenants`. The existence check of
//! `create_link` is therefore not atomic with the create.

use fishdesk_core::error::{FishdeskError, FishdeskResult};
use fishdesk_core::models::linked_tenant::{CreateTenantLink, LinkKey, LinkedTenant};
use fishdesk_core::repository::TenantLinkRepository;
use serde::Deserialize;
use serde_json::{Value, json};

use super::documents::{
    CREATE_TENANT_LINK, DELETE_TENANT_LINK, GET_LINKED_TENANTS, UPDATE_TENANT_LINK,
};
use super::{RemoteBackend, compact};

#[derive(Debug, Deserialize)]
struct RealtimeRow {
    #[serde(default)]
    realtime: Option<bool>,
}

fn key_variables(key: &LinkKey) -> Value {
    json!({ "tenantId": key.tenant_id, "linkedTenantId": key.linked_tenant_id })
}

impl TenantLinkRepository for RemoteBackend {
    async fn list_links(&self, tenant_id: &str) -> FishdeskResult<Vec<LinkedTenant>> {
        let links: Option<Vec<Option<LinkedTenant>>> = self
            .call(&GET_LINKED_TENANTS, json!({ "tenantId": tenant_id }))
            .await?;
        Ok(compact(links))
    }

    async fn get_link(&self, key: &LinkKey) -> FishdeskResult<Option<LinkedTenant>> {
        let links = self.list_links(&key.tenant_id).await?;
        Ok(links
            .into_iter()
            .find(|l| l.linked_tenant_id == key.linked_tenant_id))
    }

    async fn upsert_link(&self, input: CreateTenantLink) -> FishdeskResult<Option<LinkedTenant>> {
        let variables = json!({
            "tenantId": input.tenant_id,
            "linkedTenantId": input.linked_tenant_id,
            "createdBy": input.created_by,
            "realtime": input.realtime,
        });
        Ok(self.call(&CREATE_TENANT_LINK, variables).await?)
    }

    async fn create_link(&self, input: CreateTenantLink) -> FishdeskResult<Option<LinkedTenant>> {
        let key = input.key();
        if self.get_link(&key).await?.is_some() {
            return Err(FishdeskError::AlreadyExists {
                entity: "linked_tenant".into(),
                id: key.id(),
            });
        }
        self.upsert_link(input).await
    }

    async fn toggle_link_realtime(&self, key: &LinkKey) -> FishdeskResult<Option<bool>> {
        let row: Option<RealtimeRow> = self.call(&UPDATE_TENANT_LINK, key_variables(key)).await?;
        Ok(row.map(|r| r.realtime.unwrap_or(false)))
    }

    async fn delete_link(&self, key: &LinkKey) -> FishdeskResult<bool> {
        let result: Option<Value> = self.call(&DELETE_TENANT_LINK, key_variables(key)).await?;
        Ok(!matches!(result, None | Some(Value::Bool(false))))
    }
}
