//! Password codec error types.

use fishdesk_core::error::FishdeskError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("malformed encoded password: {0}")]
    Decode(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for FishdeskError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidKey(_) => FishdeskError::Configuration(err.to_string()),
            AuthError::Decode(_) | AuthError::Crypto(_) => FishdeskError::Crypto(err.to_string()),
        }
    }
}
