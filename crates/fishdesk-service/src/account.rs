//! Account (fisher user) facade.

use fishdesk_auth::SharedCodec;
use fishdesk_core::FishdeskResult;
use fishdesk_core::models::account::{Account, CreateAccount};
use fishdesk_core::repository::AccountRepository;
use tracing::{debug, info};

use crate::config::{Latency, ServiceConfig, commit, simulate};

/// Account operations with simulated round-trip latency.
///
/// Generic over the backend so callers never depend on the data
/// source. Writes commit on a detached task once their delay elapses.
#[derive(Debug, Clone)]
pub struct AccountService<B> {
    backend: B,
    codec: SharedCodec,
    latency: Latency,
}

impl<B> AccountService<B>
where
    B: AccountRepository + Clone + Send + Sync + 'static,
{
    /// `codec` is only used by [`decrypt_password`](Self::decrypt_password);
    /// writes are encoded by the backend.
    pub fn new(backend: B, codec: SharedCodec, config: &ServiceConfig) -> Self {
        Self {
            backend,
            codec,
            latency: config.effective_latency(),
        }
    }

    pub async fn get_account(&self, id: &str) -> FishdeskResult<Option<Account>> {
        simulate(self.latency.read_ms).await;
        self.backend.get_account(id).await
    }

    /// Create an account with a placeholder password.
    ///
    /// An existing account with the same id is replaced.
    pub async fn create_account(&self, id: &str, name: &str) -> FishdeskResult<Account> {
        let backend = self.backend.clone();
        let input = CreateAccount {
            id: id.to_string(),
            name: name.to_string(),
        };
        let account = commit(self.latency.account_create_ms, async move {
            backend.create_account(input).await
        })
        .await?;
        info!(account_id = %account.id, "Account created");
        Ok(account)
    }

    pub async fn update_account_nickname(
        &self,
        id: &str,
        nickname: &str,
    ) -> FishdeskResult<Option<Account>> {
        let backend = self.backend.clone();
        let id = id.to_string();
        let nickname = nickname.to_string();
        commit(self.latency.mutate_ms, async move {
            backend.update_account_nickname(&id, &nickname).await
        })
        .await
    }

    pub async fn update_account_password(
        &self,
        id: &str,
        password: &str,
    ) -> FishdeskResult<Option<Account>> {
        let backend = self.backend.clone();
        let owned_id = id.to_string();
        let password = password.to_string();
        let updated = commit(self.latency.mutate_ms, async move {
            backend.update_account_password(&owned_id, &password).await
        })
        .await?;
        debug!(account_id = id, updated = updated.is_some(), "Password update");
        Ok(updated)
    }

    /// Recover the plaintext of a stored password.
    ///
    /// Never fails: empty input yields an empty string and undecodable
    /// input yields the codec's fallback.
    pub async fn decrypt_password(&self, encrypted: &str) -> String {
        if encrypted.is_empty() {
            return String::new();
        }
        simulate(self.latency.decrypt_ms).await;
        self.codec.decode(encrypted)
    }
}
