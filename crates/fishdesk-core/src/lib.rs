//! fishdesk core: domain models, error taxonomy, the list/paginate
//! query layer, and the backend traits every other crate builds on.

pub mod error;
pub mod models;
pub mod query;
pub mod repository;

pub use error::{FishdeskError, FishdeskResult};
pub use query::{ListQuery, Page};
