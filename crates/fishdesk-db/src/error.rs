//! Backend-specific error types and conversions.

use fishdesk_core::error::FishdeskError;

/// Backend-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GraphQL error in {operation}: {message}")]
    GraphQl { operation: String, message: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Malformed response for {operation}: {message}")]
    Decode { operation: String, message: String },

    #[error("Response for {operation} carried no data")]
    MissingData { operation: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<DbError> for FishdeskError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Unauthorized(reason) => FishdeskError::Unauthorized { reason },
            DbError::Configuration(msg) => FishdeskError::Configuration(msg),
            other => FishdeskError::Remote(other.to_string()),
        }
    }
}
