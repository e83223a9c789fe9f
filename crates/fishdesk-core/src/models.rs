//! Domain models for fishdesk.
//!
//! Field names serialize in camelCase so the same types can be read
//! straight out of GraphQL responses.

pub mod account;
pub mod linked_tenant;
pub mod stats;
pub mod tenant;

use serde::{Deserialize, Deserializer};

/// A record with an opaque string identity, unique within its kind.
pub trait Entity {
    fn id(&self) -> &str;
}

/// Treat an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
