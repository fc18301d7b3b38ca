//! XChaCha20-Poly1305 session cipher.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chacha20poly1305::aead::{Aead, AeadCore, OsRng};
use chacha20poly1305::{Key, KeyInit, XChaCha20Poly1305, XNonce};

use super::{Cipher, CipherKey};
use crate::error::{Result, StateError};

const NONCE_LEN: usize = 24;

/// Authenticated encryption for session payloads.
///
/// Tokens are `base64(nonce || ciphertext)` with a fresh random nonce per
/// call, so encrypting the same plaintext twice yields different tokens.
pub struct SessionCipher {
    aead: XChaCha20Poly1305,
}

impl SessionCipher {
    /// Create a cipher for the given key.
    pub fn new(key: &CipherKey) -> Self {
        Self {
            aead: XChaCha20Poly1305::new(Key::from_slice(key.as_bytes())),
        }
    }
}

impl Cipher for SessionCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext =
            self.aead
                .encrypt(&nonce, plaintext.as_bytes())
                .map_err(|e| StateError::Encryption {
                    message: format!("{:?}", e),
                })?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce);
        sealed.extend_from_slice(&ciphertext);
        Ok(STANDARD.encode(sealed))
    }

    fn decrypt(&self, token: &str) -> Result<String> {
        let sealed = STANDARD
            .decode(token.trim())
            .map_err(|e| StateError::Decryption {
                message: format!("token is not base64: {}", e),
            })?;
        if sealed.len() < NONCE_LEN {
            return Err(StateError::Decryption {
                message: "token too short".to_string(),
            });
        }

        let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);
        let plaintext = self
            .aead
            .decrypt(XNonce::from_slice(nonce), ciphertext)
            .map_err(|_| StateError::Decryption {
                message: "authentication failed".to_string(),
            })?;

        String::from_utf8(plaintext).map_err(|_| StateError::Decryption {
            message: "plaintext is not UTF-8".to_string(),
        })
    }
}
