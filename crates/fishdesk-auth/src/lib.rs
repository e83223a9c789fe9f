//! fishdesk auth: reversible password encoding for fisher user
//! accounts.
//!
//! Two codecs share the [`PasswordCodec`] trait: a base64 codec for the
//! in-memory development backend and an AES-256-GCM envelope codec that
//! stands in for KMS decryption.

pub mod config;
pub mod envelope;
pub mod error;
pub mod password;

pub use config::{CodecConfig, CodecKind};
pub use envelope::EnvelopeCodec;
pub use error::AuthError;
pub use password::{Base64Codec, PasswordCodec, SharedCodec, build_codec};
