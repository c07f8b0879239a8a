//! AES-256-CBC encryption with PKCS#7 padding.
//!
//! Each call to `encrypt` generates a fresh random 16-byte IV and
//! returns it alongside the ciphertext; `decrypt` takes them back
//! separately.  There is no authentication tag: a wrong key is detected
//! only by the strict PKCS#7 unpadding check here, and one layer up by
//! the decrypted vault failing to parse.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

use crate::errors::{PasskeepError, Result};

use super::kdf::KEY_LEN;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Size of the CBC initialization vector in bytes (one AES block).
pub const IV_LEN: usize = 16;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns the freshly generated IV and the ciphertext separately so
/// the storage layer decides how to lay them out on disk.  The IV comes
/// from the OS RNG on every call and is never reused.
pub fn encrypt(key: &[u8; KEY_LEN], plaintext: &[u8]) -> ([u8; IV_LEN], Vec<u8>) {
    let mut iv = [0u8; IV_LEN];
    rand::rngs::OsRng.fill_bytes(&mut iv);

    let ciphertext =
        Aes256CbcEnc::new(key.into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    (iv, ciphertext)
}

/// Decrypt data that was produced by `encrypt`.
///
/// Fails with `AuthFailed` when the PKCS#7 padding does not check out.
/// The unpad check is strict: the last byte N must be in 1..=16 and the
/// final N bytes must all equal N, otherwise the key was wrong or the
/// ciphertext is corrupt.
pub fn decrypt(key: &[u8; KEY_LEN], iv: &[u8; IV_LEN], ciphertext: &[u8]) -> Result<Vec<u8>> {
    Aes256CbcDec::new(key.into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| PasskeepError::AuthFailed)
}
