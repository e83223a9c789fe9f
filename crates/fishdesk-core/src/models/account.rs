//! Fisher user (account) domain model.

use serde::{Deserialize, Serialize};

use super::{Entity, null_as_default};
use crate::query::Named;

/// Role of a device within an account; the first device is primary.
pub const DEVICE_TYPE_PRIMARY: &str = "PRIMARY";
pub const DEVICE_TYPE_SECONDARY: &str = "SECONDARY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nickname: String,
    /// Encoded (development) or KMS ciphertext (production). Never plaintext.
    #[serde(default, deserialize_with = "null_as_default")]
    pub encrypted_password: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tenants: Vec<TenantRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub devices: DeviceList,
    /// `None` when the account has no LINE identity attached.
    #[serde(default)]
    pub line_users: Option<Vec<LineUser>>,
}

impl Account {
    pub fn belongs_to(&self, tenant_id: &str) -> bool {
        self.tenants.iter().any(|t| t.id == tenant_id)
    }

    pub fn device_count(&self) -> usize {
        self.devices.devices.len()
    }
}

impl Entity for Account {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Named for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Id/name pair of a tenant an account belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    #[serde(default)]
    pub imei: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub device_type: String,
}

/// A LINE messaging identity linked to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineUser {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub picture_url: Option<String>,
}

/// Fields required to create a new account.
///
/// The caller guarantees `id` is unused; creating over an existing id
/// replaces that account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    pub id: String,
    pub name: String,
}
