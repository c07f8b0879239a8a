//! Cryptographic primitives for Passkeep.
//!
//! This module provides:
//! - AES-256-CBC encryption and decryption with PKCS#7 padding (`cipher`)
//! - SHA-256 passphrase-to-key derivation (`kdf`)

pub mod cipher;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key};
pub use cipher::{decrypt, encrypt, IV_LEN};
pub use kdf::{derive_key, KEY_LEN};
