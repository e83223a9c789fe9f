//! In-memory implementation of [`AccountRepository`].
//!
//! Passwords go through the backend's codec on every write, so creation
//! and password updates share one encoding path.

use fishdesk_core::FishdeskResult;
use fishdesk_core::models::account::{Account, CreateAccount, DeviceList};
use fishdesk_core::repository::AccountRepository;
use tracing::{debug, info, warn};

use super::MemoryBackend;

impl AccountRepository for MemoryBackend {
    async fn get_account(&self, id: &str) -> FishdeskResult<Option<Account>> {
        Ok(self.store.accounts.get(id))
    }

    async fn create_account(&self, input: CreateAccount) -> FishdeskResult<Account> {
        let encrypted_password = self.codec.encode(&format!("password-{}", input.name))?;
        let account = Account {
            nickname: input.name.clone(),
            name: input.name,
            id: input.id,
            encrypted_password,
            tenants: Vec::new(),
            devices: DeviceList::default(),
            line_users: None,
        };

        if self.store.accounts.put(account.clone()).is_some() {
            warn!(account_id = %account.id, "Account id reused, previous account replaced");
        } else {
            info!(account_id = %account.id, "Created account");
        }
        Ok(account)
    }

    async fn update_account_nickname(
        &self,
        id: &str,
        nickname: &str,
    ) -> FishdeskResult<Option<Account>> {
        let updated = self
            .store
            .accounts
            .update(id, |a| a.nickname = nickname.to_string());
        debug!(account_id = id, found = updated.is_some(), "Updated nickname");
        Ok(updated)
    }

    async fn update_account_password(
        &self,
        id: &str,
        password: &str,
    ) -> FishdeskResult<Option<Account>> {
        if !self.store.accounts.contains(id) {
            return Ok(None);
        }
        let encoded = self.codec.encode(password)?;
        let updated = self
            .store
            .accounts
            .update(id, |a| a.encrypted_password = encoded);
        debug!(account_id = id, found = updated.is_some(), "Updated password");
        Ok(updated)
    }

    async fn list_accounts_by_tenant(&self, tenant_id: &str) -> FishdeskResult<Vec<Account>> {
        Ok(self.store.accounts.find(|a| a.belongs_to(tenant_id)))
    }
}
