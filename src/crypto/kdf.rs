//! Passphrase-based key derivation.
//!
//! The master key is the SHA-256 digest of the UTF-8 passphrase bytes.
//! No password hash is stored anywhere: a wrong passphrase derives a
//! wrong key, and decryption then fails at the padding check.

use sha2::{Digest, Sha256};

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Derive a 32-byte symmetric key from the master passphrase.
///
/// The same passphrase always produces the same key.
pub fn derive_key(passphrase: &str) -> [u8; KEY_LEN] {
    let digest = Sha256::digest(passphrase.as_bytes());
    digest.into()
}
