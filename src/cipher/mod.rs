//! Reversible encryption of stored payloads.
//!
//! The history engine treats the cipher as a black box behind the
//! [`Cipher`] trait. [`SessionCipher`] is the bundled implementation.
//!
//! # Example
//!
//! ```
//! use statetrail::cipher::{Cipher, CipherKey, SessionCipher};
//!
//! let cipher = SessionCipher::new(&CipherKey::generate());
//! let token = cipher.encrypt("hello").unwrap();
//! assert_eq!(cipher.decrypt(&token).unwrap(), "hello");
//! ```

mod key;
mod xchacha;

pub use key::CipherKey;
pub use xchacha::SessionCipher;

use crate::error::Result;

/// Opaque reversible encryption.
pub trait Cipher {
    /// Encrypt `plaintext` into a printable token.
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Recover the plaintext from a token.
    ///
    /// Invalid or tampered tokens fail with
    /// [`StateError::Decryption`](crate::error::StateError::Decryption).
    fn decrypt(&self, token: &str) -> Result<String>;
}
