//! Aggregate counters shown on the dashboard and tenant pages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_tenants: u64,
    pub total_fisher_users: u64,
    pub total_devices: u64,
    pub open_accidents: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantStats {
    pub fisher_user_count: u64,
    pub open_accident_count: u64,
    pub total_accident_count: u64,
}
