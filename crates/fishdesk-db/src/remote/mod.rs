//! Remote backend speaking GraphQL over HTTP.
//!
//! Every trait method maps onto one or more operations from
//! [`documents`]. Null entries in returned lists are dropped.

mod account;
mod client;
pub mod documents;
mod link;
mod stats;
mod tenant;

use fishdesk_core::FishdeskResult;
use fishdesk_core::models::tenant::Tenant;
use fishdesk_core::repository::MemberSource;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use client::GraphQlClient;

use crate::config::BackendConfig;
use crate::error::DbError;
use documents::Operation;

/// Backend serving every operation from the GraphQL API.
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    client: GraphQlClient,
}

impl RemoteBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, DbError> {
        Ok(Self::with_client(GraphQlClient::new(config)?))
    }

    pub fn with_client(client: GraphQlClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GraphQlClient {
        &self.client
    }

    async fn call<T: DeserializeOwned>(
        &self,
        op: &Operation,
        variables: Value,
    ) -> Result<Option<T>, DbError> {
        self.client.execute(op, variables).await
    }

    /// Like [`call`](Self::call), for mutations that must return a record.
    async fn call_required<T: DeserializeOwned>(
        &self,
        op: &Operation,
        variables: Value,
    ) -> Result<T, DbError> {
        self.call(op, variables)
            .await?
            .ok_or_else(|| DbError::MissingData {
                operation: op.name.to_string(),
            })
    }
}

/// Drop `null` entries from a nullable GraphQL list.
fn compact<T>(items: Option<Vec<Option<T>>>) -> Vec<T> {
    items.into_iter().flatten().flatten().collect()
}

impl MemberSource for RemoteBackend {
    async fn ensure_members(&self, _tenant: &Tenant) -> FishdeskResult<usize> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_drops_nulls() {
        assert_eq!(compact(Some(vec![Some(1), None, Some(3)])), vec![1, 3]);
        assert!(compact::<u8>(None).is_empty());
    }
}
