//! fishdesk data access.
//!
//! Two implementations of the backend traits from
//! [`fishdesk_core::repository`]:
//!
//! - [`MemoryBackend`]: keyed [`EntityStore`]s seeded with synthetic
//!   tenants and links, listed through the core query layer.
//! - [`RemoteBackend`]: the GraphQL API over HTTP.
//!
//! [`Backend`] selects one of them from [`BackendConfig`].

pub mod backend;
pub mod config;
pub mod error;
pub mod memory;
pub mod remote;
mod rng;
pub mod store;

pub use backend::Backend;
pub use config::{BackendConfig, BackendMode, SeedConfig};
pub use error::DbError;
pub use memory::{MemoryBackend, MemoryStore, SeedReport};
pub use remote::{GraphQlClient, RemoteBackend};
pub use store::EntityStore;
