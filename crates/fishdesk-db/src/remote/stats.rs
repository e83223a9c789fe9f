//! Remote implementation of [`StatisticsRepository`].

use fishdesk_core::FishdeskResult;
use fishdesk_core::models::stats::{DashboardStats, TenantStats};
use fishdesk_core::repository::StatisticsRepository;
use serde::Deserialize;
use serde_json::{Value, json};

use super::RemoteBackend;
use super::documents::{
    GET_ACCIDENT_COUNT_BY_STATUS, GET_TENANT_ACCIDENT_COUNT, GET_TENANT_FISHER_USER_COUNT,
    GET_TOTAL_DEVICE_COUNT, GET_TOTAL_FISHER_USER_COUNT, GET_TOTAL_TENANT_COUNT, Operation,
};
use crate::error::DbError;

const OPEN_STATUS: &str = "OPEN";

#[derive(Debug, Deserialize)]
struct CountRow {
    #[serde(default)]
    count: u64,
}

impl RemoteBackend {
    /// A `{count}` result; a null result counts as zero.
    async fn count(&self, op: &Operation, variables: Value) -> Result<u64, DbError> {
        let row: Option<CountRow> = self.call(op, variables).await?;
        Ok(row.map_or(0, |r| r.count))
    }
}

impl StatisticsRepository for RemoteBackend {
    async fn dashboard_stats(&self) -> FishdeskResult<DashboardStats> {
        let (open_accidents, total_tenants, total_fisher_users, total_devices) = tokio::try_join!(
            self.count(&GET_ACCIDENT_COUNT_BY_STATUS, json!({ "status": OPEN_STATUS })),
            self.count(&GET_TOTAL_TENANT_COUNT, json!({})),
            self.count(&GET_TOTAL_FISHER_USER_COUNT, json!({})),
            self.count(&GET_TOTAL_DEVICE_COUNT, json!({})),
        )?;
        Ok(DashboardStats {
            total_tenants,
            total_fisher_users,
            total_devices,
            open_accidents,
        })
    }

    async fn tenant_stats(&self, tenant_id: &str) -> FishdeskResult<TenantStats> {
        let (fisher_user_count, open_accident_count, total_accident_count) = tokio::try_join!(
            self.count(&GET_TENANT_FISHER_USER_COUNT, json!({ "tenantId": tenant_id })),
            self.count(
                &GET_TENANT_ACCIDENT_COUNT,
                json!({ "tenantId": tenant_id, "status": OPEN_STATUS })
            ),
            self.count(
                &GET_TENANT_ACCIDENT_COUNT,
                json!({ "tenantId": tenant_id, "status": null })
            ),
        )?;
        Ok(TenantStats {
            fisher_user_count,
            open_accident_count,
            total_accident_count,
        })
    }
}
