//! On-disk vault file layout and atomic writes.
//!
//! A vault file is the 16-byte IV followed directly by the ciphertext:
//!
//! ```text
//! [IV: 16 bytes][AES-256-CBC ciphertext: rest of file]
//! ```
//!
//! There is no magic, no version byte, and no integrity tag; the only
//! structure is the IV split.  Writes go through a temp file in the
//! same directory plus a rename, so readers never see a half-written
//! file and a failed cycle leaves the previous bytes intact.

use std::fs;
use std::path::Path;

use crate::crypto::IV_LEN;
use crate::errors::{PasskeepError, Result};

/// Write `iv` followed by `ciphertext` to `path` **atomically**.
///
/// 1. Assemble the full blob in memory.
/// 2. Write it to a temp file in the same directory.
/// 3. Rename the temp file over the target path.
///
/// The temp file lives next to the target so the rename stays on one
/// filesystem and is guaranteed atomic.
pub fn write_vault_file(path: &Path, iv: &[u8; IV_LEN], ciphertext: &[u8]) -> Result<()> {
    let mut buf = Vec::with_capacity(IV_LEN + ciphertext.len());
    buf.extend_from_slice(iv);
    buf.extend_from_slice(ciphertext);

    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, &buf)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

/// Read a vault file from disk and split it into IV and ciphertext.
///
/// A file too short to hold an IV is reported with the same error kind
/// as a wrong key: the store cannot tell corruption and a bad
/// passphrase apart, and does not try to.
pub fn read_vault_file(path: &Path) -> Result<([u8; IV_LEN], Vec<u8>)> {
    if !path.exists() {
        return Err(PasskeepError::VaultNotFound(path.to_path_buf()));
    }

    let data = fs::read(path)?;

    if data.len() < IV_LEN {
        return Err(PasskeepError::AuthFailed);
    }

    let (iv_bytes, ciphertext) = data.split_at(IV_LEN);
    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(iv_bytes);

    Ok((iv, ciphertext.to_vec()))
}
