//! Password codec configuration.

use serde::Deserialize;

/// Which codec encodes stored passwords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecKind {
    /// Plain base64 of the UTF-8 bytes. Development only.
    #[default]
    Base64,
    /// AES-256-GCM with a configured data key.
    Envelope,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub codec: CodecKind,
    /// Hex-encoded 256-bit data key. Required for [`CodecKind::Envelope`].
    pub envelope_key_hex: Option<String>,
    /// Returned by `decode` when the input cannot be decoded.
    pub fallback_password: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            codec: CodecKind::Base64,
            envelope_key_hex: None,
            fallback_password: "mock-password-123".into(),
        }
    }
}
