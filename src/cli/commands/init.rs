//! `passkeep init` — create a new vault.

use std::fs;

use crate::cli::output;
use crate::cli::{prompt_new_passphrase, vault_path, Cli};
use crate::errors::{PasskeepError, Result};
use crate::vault::CredentialStore;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = vault_path(cli)?;

    // Refuse to clobber an existing vault. The store itself overwrites
    // unconditionally, so the check lives here, before any prompt.
    let store = CredentialStore::open(&path);
    if store.exists() {
        output::tip("Use `passkeep add` to store secrets in the existing vault.");
        return Err(PasskeepError::VaultAlreadyExists(path));
    }

    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            output::info(&format!("Created vault directory: {}", dir.display()));
        }
    }

    let passphrase = prompt_new_passphrase()?;
    store.create(&passphrase)?;

    output::success(&format!("Vault created at {}", path.display()));
    output::tip("Run `passkeep add <HANDLE>` to store a secret.");
    output::tip("Run `passkeep list` to see all handles.");

    Ok(())
}
