//! Cipher key material.

use std::fmt;

use chacha20poly1305::aead::OsRng;
use chacha20poly1305::{KeyInit, XChaCha20Poly1305};
use sha2::{Digest, Sha256};

use crate::error::{Result, StateError};

/// A 256-bit symmetric key for session payloads.
#[derive(Clone, PartialEq, Eq)]
pub struct CipherKey([u8; CipherKey::LEN]);

impl CipherKey {
    /// Key length in bytes.
    pub const LEN: usize = 32;

    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a key from 64 hex characters.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim()).map_err(|e| StateError::InvalidKey {
            message: format!("not valid hex: {}", e),
        })?;
        let bytes: [u8; Self::LEN] =
            bytes
                .try_into()
                .map_err(|bytes: Vec<u8>| StateError::InvalidKey {
                    message: format!("expected {} bytes, got {}", Self::LEN, bytes.len()),
                })?;
        Ok(Self(bytes))
    }

    /// Derive a key from a passphrase with SHA-256.
    ///
    /// Suitable for local tooling; production hosts should supply a random
    /// key through [`CipherKey::from_hex`].
    pub fn derive(passphrase: &str) -> Self {
        let digest = Sha256::digest(passphrase.as_bytes());
        let mut bytes = [0u8; Self::LEN];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Generate a random key from the operating system RNG.
    pub fn generate() -> Self {
        let key = XChaCha20Poly1305::generate_key(&mut OsRng);
        let mut bytes = [0u8; Self::LEN];
        bytes.copy_from_slice(&key);
        Self(bytes)
    }

    /// Hex encoding of the key.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub(crate) fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CipherKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let key = CipherKey::from_bytes([7u8; 32]);
        let parsed = CipherKey::from_hex(&key.to_hex()).unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let err = CipherKey::from_hex("abcd").unwrap_err();
        assert!(err.to_string().contains("expected 32 bytes, got 2"));
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        let err = CipherKey::from_hex(&"zz".repeat(32)).unwrap_err();
        assert!(matches!(err, StateError::InvalidKey { .. }));
    }

    #[test]
    fn derive_is_deterministic() {
        assert_eq!(CipherKey::derive("secret"), CipherKey::derive("secret"));
        assert_ne!(CipherKey::derive("secret"), CipherKey::derive("other"));
    }

    #[test]
    fn generate_produces_distinct_keys() {
        assert_ne!(CipherKey::generate(), CipherKey::generate());
    }

    #[test]
    fn debug_redacts_bytes() {
        let key = CipherKey::from_bytes([0xAB; 32]);
        let debug = format!("{:?}", key);
        assert!(!debug.contains("ab"));
        assert!(debug.contains("REDACTED"));
    }
}
