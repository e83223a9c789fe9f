//! Tenant domain model.
//!
//! A tenant is an organizational unit that owns fisher user accounts and
//! their devices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::{Entity, null_as_default};
use crate::query::Named;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Postal address; empty when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Tenant {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Named for Tenant {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Fields required to create a new tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenant {
    pub name: String,
    pub address: Option<String>,
}

/// Full replacement of a tenant's mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTenant {
    pub name: String,
    pub address: String,
}

/// A tenant together with the accounts that belong to it.
///
/// `tenant` is `None` when the id is unknown; `members` is then empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantWithMembers {
    pub tenant: Option<Tenant>,
    pub members: Vec<Account>,
}

impl TenantWithMembers {
    pub fn missing() -> Self {
        Self::default()
    }
}
