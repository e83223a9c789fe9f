//! AES-256-GCM envelope codec.
//!
//! Local replacement for the KMS `Encrypt`/`Decrypt` round trip: the
//! data key comes from configuration instead of a key service, the wire
//! format is `base64(nonce || ciphertext || tag)`.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::AuthError;
use crate::password::PasswordCodec;

const NONCE_LEN: usize = 12;

pub struct EnvelopeCodec {
    cipher: Aes256Gcm,
    fallback: String,
}

impl std::fmt::Debug for EnvelopeCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvelopeCodec").finish_non_exhaustive()
    }
}

impl EnvelopeCodec {
    pub fn new(key: &[u8; 32], fallback: impl Into<String>) -> Self {
        Self {
            cipher: Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key)),
            fallback: fallback.into(),
        }
    }

    /// Build from a hex-encoded 256-bit key.
    pub fn from_hex(key_hex: &str, fallback: impl Into<String>) -> Result<Self, AuthError> {
        let bytes = hex::decode(key_hex.trim())
            .map_err(|e| AuthError::InvalidKey(format!("hex decode: {e}")))?;
        let key: [u8; 32] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| AuthError::InvalidKey(format!("expected 32 bytes, got {}", b.len())))?;
        Ok(Self::new(&key, fallback))
    }
}

impl PasswordCodec for EnvelopeCodec {
    fn encode(&self, plaintext: &str) -> Result<String, AuthError> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|e| AuthError::Crypto(format!("AES-GCM encrypt: {e}")))?;

        let mut combined = nonce_bytes.to_vec();
        combined.extend_from_slice(&ciphertext);
        Ok(STANDARD.encode(combined))
    }

    fn try_decode(&self, encoded: &str) -> Result<String, AuthError> {
        let combined = STANDARD
            .decode(encoded)
            .map_err(|e| AuthError::Decode(format!("base64 decode: {e}")))?;

        // Nonce plus the 16-byte tag of an empty plaintext.
        if combined.len() < NONCE_LEN + 16 {
            return Err(AuthError::Decode("ciphertext too short".into()));
        }

        let (nonce_bytes, ciphertext) = combined.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|e| AuthError::Crypto(format!("AES-GCM decrypt: {e}")))?;

        String::from_utf8(plaintext).map_err(|e| AuthError::Decode(format!("not UTF-8: {e}")))
    }

    fn fallback(&self) -> &str {
        &self.fallback
    }
}
