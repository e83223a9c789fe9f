//! Linked tenant domain model.
//!
//! A link is a directed relation granting `tenant_id` visibility of (and
//! optionally a realtime event feed from) `linked_tenant_id`. At most one
//! link exists per ordered pair: the pair is the key.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::tenant::Tenant;
use super::{Entity, null_as_default};
use crate::query::Named;

/// SNS topic ARN prefix; the linked tenant's id is appended.
pub const TOPIC_ARN_PREFIX: &str = "arn:aws:sns:ap-northeast-1:123456789:";

/// Composite key of a link: the ordered `(tenant, linked tenant)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkKey {
    pub tenant_id: String,
    pub linked_tenant_id: String,
}

impl LinkKey {
    pub fn new(tenant_id: impl Into<String>, linked_tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            linked_tenant_id: linked_tenant_id.into(),
        }
    }

    /// Record id derived from the pair: `link-{tenant}-{linked}`.
    pub fn id(&self) -> String {
        format!("link-{}-{}", self.tenant_id, self.linked_tenant_id)
    }
}

impl fmt::Display for LinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.tenant_id, self.linked_tenant_id)
    }
}

/// Copy of the linked tenant taken when the link was created.
///
/// Later edits to the tenant are not propagated into existing snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedTenantSnapshot {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topic_arn: String,
}

impl LinkedTenantSnapshot {
    /// Snapshot `tenant`, using `now` for timestamps it does not carry.
    pub fn of(tenant: &Tenant, now: DateTime<Utc>) -> Self {
        Self {
            id: tenant.id.clone(),
            name: tenant.name.clone(),
            address: tenant.address.clone(),
            created_at: tenant.created_at.unwrap_or(now),
            updated_at: tenant.updated_at.unwrap_or(now),
            topic_arn: format!("{TOPIC_ARN_PREFIX}{}", tenant.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedTenant {
    pub id: String,
    pub tenant_id: String,
    pub linked_tenant_id: String,
    /// Whether the realtime event feed is enabled.
    pub realtime: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub tenant: LinkedTenantSnapshot,
}

impl LinkedTenant {
    pub fn key(&self) -> LinkKey {
        LinkKey::new(self.tenant_id.clone(), self.linked_tenant_id.clone())
    }
}

impl Entity for LinkedTenant {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Named for LinkedTenant {
    fn name(&self) -> &str {
        &self.tenant.name
    }
}

/// Fields required to create (or overwrite) a link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantLink {
    pub tenant_id: String,
    pub linked_tenant_id: String,
    pub created_by: String,
    pub realtime: bool,
}

impl CreateTenantLink {
    pub fn key(&self) -> LinkKey {
        LinkKey::new(self.tenant_id.clone(), self.linked_tenant_id.clone())
    }

    /// Build the link record against the linked tenant `target`.
    pub fn into_link(self, target: &Tenant, now: DateTime<Utc>) -> LinkedTenant {
        LinkedTenant {
            id: self.key().id(),
            tenant_id: self.tenant_id,
            linked_tenant_id: self.linked_tenant_id,
            realtime: self.realtime,
            created_at: now,
            created_by: self.created_by,
            tenant: LinkedTenantSnapshot::of(target, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_id_is_derived_from_ordered_pair() {
        assert_eq!(LinkKey::new("a", "b").id(), "link-a-b");
        assert_ne!(LinkKey::new("a", "b").id(), LinkKey::new("b", "a").id());
    }

    #[test]
    fn snapshot_fills_missing_timestamps() {
        let now = Utc::now();
        let tenant = Tenant {
            id: "t-1".into(),
            name: "鈴木マリン".into(),
            address: String::new(),
            created_at: None,
            updated_at: None,
        };
        let snapshot = LinkedTenantSnapshot::of(&tenant, now);
        assert_eq!(snapshot.created_at, now);
        assert_eq!(snapshot.updated_at, now);
        assert_eq!(
            snapshot.topic_arn,
            "arn:aws:sns:ap-northeast-1:123456789:t-1"
        );
    }
}
