//! Reversible password codecs.
//!
//! `decode(encode(x)) == x` holds for every string, including empty and
//! non-ASCII input. [`PasswordCodec::decode`] never fails: malformed
//! input is logged and replaced by the codec's fallback value.

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::warn;

use crate::config::{CodecConfig, CodecKind};
use crate::envelope::EnvelopeCodec;
use crate::error::AuthError;

pub trait PasswordCodec: Send + Sync + fmt::Debug {
    fn encode(&self, plaintext: &str) -> Result<String, AuthError>;

    /// Strict decode, reporting malformed input as an error.
    fn try_decode(&self, encoded: &str) -> Result<String, AuthError>;

    /// Value substituted for undecodable input.
    fn fallback(&self) -> &str;

    /// Lenient decode. Empty input decodes to an empty string.
    fn decode(&self, encoded: &str) -> String {
        if encoded.is_empty() {
            return String::new();
        }
        match self.try_decode(encoded) {
            Ok(plaintext) => plaintext,
            Err(e) => {
                warn!(error = %e, "Failed to decode password, substituting fallback");
                self.fallback().to_string()
            }
        }
    }
}

/// Codec shared between a backend and the services above it.
pub type SharedCodec = Arc<dyn PasswordCodec>;

/// Base64 over the UTF-8 bytes of the password.
#[derive(Debug, Clone)]
pub struct Base64Codec {
    fallback: String,
}

impl Base64Codec {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }
}

impl Default for Base64Codec {
    fn default() -> Self {
        Self::new(CodecConfig::default().fallback_password)
    }
}

impl PasswordCodec for Base64Codec {
    fn encode(&self, plaintext: &str) -> Result<String, AuthError> {
        Ok(STANDARD.encode(plaintext.as_bytes()))
    }

    fn try_decode(&self, encoded: &str) -> Result<String, AuthError> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| AuthError::Decode(format!("base64 decode: {e}")))?;
        String::from_utf8(bytes).map_err(|e| AuthError::Decode(format!("not UTF-8: {e}")))
    }

    fn fallback(&self) -> &str {
        &self.fallback
    }
}

/// Build the codec selected by `config`.
pub fn build_codec(config: &CodecConfig) -> Result<SharedCodec, AuthError> {
    let codec: SharedCodec = match config.codec {
        CodecKind::Base64 => Arc::new(Base64Codec::new(config.fallback_password.clone())),
        CodecKind::Envelope => {
            let key_hex = config.envelope_key_hex.as_deref().ok_or_else(|| {
                AuthError::InvalidKey("envelope codec requires envelope_key_hex".into())
            })?;
            Arc::new(EnvelopeCodec::from_hex(
                key_hex,
                config.fallback_password.clone(),
            )?)
        }
    };
    Ok(codec)
}
