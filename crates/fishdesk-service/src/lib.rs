//! fishdesk service facades.
//!
//! Each facade wraps a backend with a simulated network delay and
//! returns plain values shaped like the GraphQL API's results. Mutations
//! run on a detached task and commit atomically once their delay has
//! elapsed, whether or not the caller is still waiting.

pub mod account;
pub mod config;
pub mod stats;
pub mod tenant;

pub use account::AccountService;
pub use config::{Latency, ServiceConfig};
pub use stats::StatisticsService;
pub use tenant::TenantService;
