//! Error types for the fishdesk system.
//!
//! Absence of a record is not an error: lookups and updates return
//! `Option`. These variants cover the faults that remain.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FishdeskError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity} with id {id}")]
    AlreadyExists { entity: String, id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("Remote backend error: {0}")]
    Remote(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type FishdeskResult<T> = Result<T, FishdeskError>;
