//! The credential store: one encrypted file, one lock, and a full
//! load-mutate-save cycle per operation.
//!
//! Every operation takes the master passphrase as an explicit argument;
//! the store never caches it or the derived key.  A single `Mutex`
//! serializes every cycle (enumeration included), and the guard is
//! dropped on all exit paths, so concurrent callers cannot interleave
//! and lose updates.  Last writer wins for the whole file; there is no
//! per-entry merge and no cross-process exclusion.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use zeroize::Zeroize;

use crate::crypto::{decrypt, derive_key, encrypt};
use crate::errors::{PasskeepError, Result};

use super::entry::{Entry, Vault};
use super::format::{read_vault_file, write_vault_file};

/// Handle to one vault file on disk.  Create one with
/// `CredentialStore::open`, then drive it with the operation methods.
pub struct CredentialStore {
    /// Path to the vault file.
    path: PathBuf,

    /// Whether the file was present when this store was constructed.
    existed: bool,

    /// Serializes every load-mutate-save cycle against the file.
    lock: Mutex<()>,
}

impl CredentialStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a store handle for `path`.
    ///
    /// Checks once whether a vault file is already present; `exists`
    /// reports that snapshot so callers can pick between first-run
    /// setup and a normal unlock.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let existed = path.is_file();
        Self {
            path,
            existed,
            lock: Mutex::new(()),
        }
    }

    /// Whether a vault file was present at construction time.
    pub fn exists(&self) -> bool {
        self.existed
    }

    /// Path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Create a new, empty vault encrypted under `passphrase`.
    ///
    /// Overwrites any existing file unconditionally; callers wanting
    /// overwrite protection check `exists` first.
    pub fn create(&self, passphrase: &str) -> Result<()> {
        let _guard = self.lock_store();
        self.write_vault(&Vault::new(), passphrase)
    }

    /// Decrypt and return the whole vault.
    pub fn load(&self, passphrase: &str) -> Result<Vault> {
        let _guard = self.lock_store();
        self.read_vault(passphrase)
    }

    /// Every entry's `(usage_count, handle)` pair, in no particular
    /// order.  Callers sort; descending by count approximates
    /// most-used-first.
    pub fn list_handles(&self, passphrase: &str) -> Result<Vec<(u64, String)>> {
        let _guard = self.lock_store();
        let vault = self.read_vault(passphrase)?;
        Ok(vault
            .iter()
            .map(|(handle, entry)| (entry.usage_count, handle.clone()))
            .collect())
    }

    /// Retrieve the secret for `handle`, bumping its usage count by
    /// exactly one.
    ///
    /// The increment and the returned secret come from the same load,
    /// and the updated vault is written back before the secret is
    /// returned.
    pub fn get_secret(&self, handle: &str, passphrase: &str) -> Result<String> {
        let _guard = self.lock_store();
        let mut vault = self.read_vault(passphrase)?;

        let entry = vault
            .get_mut(handle)
            .ok_or_else(|| PasskeepError::HandleNotFound(handle.to_string()))?;
        entry.usage_count += 1;
        let secret = entry.secret.clone();

        self.write_vault(&vault, passphrase)?;
        Ok(secret)
    }

    /// Add a new entry or replace the secret of an existing one.
    ///
    /// A replaced entry keeps its usage count; a new entry starts at
    /// zero.
    pub fn add_or_replace(&self, handle: &str, secret: &str, passphrase: &str) -> Result<()> {
        let _guard = self.lock_store();
        let mut vault = self.read_vault(passphrase)?;

        match vault.get_mut(handle) {
            Some(entry) => entry.secret = secret.to_string(),
            None => vault.insert(handle.to_string(), Entry::new(secret)),
        }

        self.write_vault(&vault, passphrase)
    }

    /// Remove `handle` from the vault.
    ///
    /// Fails without touching the file when the handle is absent.
    pub fn delete(&self, handle: &str, passphrase: &str) -> Result<()> {
        let _guard = self.lock_store();
        let mut vault = self.read_vault(passphrase)?;

        if vault.remove(handle).is_none() {
            return Err(PasskeepError::HandleNotFound(handle.to_string()));
        }

        self.write_vault(&vault, passphrase)
    }

    /// Re-encrypt the vault under a new master passphrase.
    ///
    /// The vault contents are untouched; only the key changes, along
    /// with the IV, which is fresh on every write.
    pub fn change_master(&self, new_passphrase: &str, old_passphrase: &str) -> Result<()> {
        let _guard = self.lock_store();
        let vault = self.read_vault(old_passphrase)?;
        self.write_vault(&vault, new_passphrase)
    }

    // ------------------------------------------------------------------
    // Internal load/save (callers hold the lock)
    // ------------------------------------------------------------------

    /// Read the file, split the IV, decrypt, and parse the vault JSON.
    ///
    /// Both failure stages — bad padding and unparseable plaintext —
    /// surface as `AuthFailed`: the store cannot tell a wrong
    /// passphrase from a corrupted file.
    fn read_vault(&self, passphrase: &str) -> Result<Vault> {
        let (iv, ciphertext) = read_vault_file(&self.path)?;

        let mut key = derive_key(passphrase);
        let decrypted = decrypt(&key, &iv, &ciphertext);
        key.zeroize();

        let mut plaintext = decrypted?;
        let vault = serde_json::from_slice(&plaintext).map_err(|_| PasskeepError::AuthFailed);
        plaintext.zeroize();

        vault
    }

    /// Serialize, encrypt under a fresh IV, and write back atomically.
    fn write_vault(&self, vault: &Vault, passphrase: &str) -> Result<()> {
        let mut plaintext = serde_json::to_vec(vault)
            .map_err(|e| PasskeepError::SerializationError(format!("vault: {e}")))?;

        let mut key = derive_key(passphrase);
        let (iv, ciphertext) = encrypt(&key, &plaintext);
        key.zeroize();
        plaintext.zeroize();

        write_vault_file(&self.path, &iv, &ciphertext)
    }

    /// Acquire the store lock, recovering the guard if a previous
    /// holder panicked mid-cycle.  The on-disk state is still
    /// consistent in that case because writes are atomic.
    fn lock_store(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
