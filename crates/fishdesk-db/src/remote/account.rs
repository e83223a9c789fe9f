//! Remote implementation of [`AccountRepository`].
//!
//! Password updates send plaintext; the API encrypts it server-side.

use fishdesk_core::FishdeskResult;
use fishdesk_core::models::account::{Account, CreateAccount};
use fishdesk_core::repository::AccountRepository;
use serde_json::json;

use super::RemoteBackend;
use super::documents::{
    CREATE_FISHER_USER, GET_FISHER_USER_BY_ID, UPDATE_FISHER_USER_NICKNAME,
    UPDATE_FISHER_USER_PASSWORD,
};

impl AccountRepository for RemoteBackend {
    async fn get_account(&self, id: &str) -> FishdeskResult<Option<Account>> {
        Ok(self.call(&GET_FISHER_USER_BY_ID, json!({ "id": id })).await?)
    }

    async fn create_account(&self, input: CreateAccount) -> FishdeskResult<Account> {
        let variables = json!({ "id": input.id, "name": input.name });
        Ok(self.call_required(&CREATE_FISHER_USER, variables).await?)
    }

    async fn update_account_nickname(
        &self,
        id: &str,
        nickname: &str,
    ) -> FishdeskResult<Option<Account>> {
        let variables = json!({ "id": id, "nickname": nickname });
        Ok(self.call(&UPDATE_FISHER_USER_NICKNAME, variables).await?)
    }

    async fn update_account_password(
        &self,
        id: &str,
        password: &str,
    ) -> FishdeskResult<Option<Account>> {
        let variables = json!({ "id": id, "password": password });
        Ok(self.call(&UPDATE_FISHER_USER_PASSWORD, variables).await?)
    }

    async fn list_accounts_by_tenant(&self, tenant_id: &str) -> FishdeskResult<Vec<Account>> {
        Ok(self
            .fetch_tenant_with_members(tenant_id)
            .await?
            .map(|row| row.into_members())
            .unwrap_or_default())
    }
}
