//! `passkeep change-master` — re-encrypt the vault under a new passphrase.
//!
//! Loads the vault under the old passphrase, then writes the identical
//! contents back encrypted under the new one. Handles, secrets, and
//! usage counts are untouched.

use crate::cli::output;
use crate::cli::{prompt_new_passphrase, prompt_passphrase, vault_path, Cli};
use crate::errors::Result;
use crate::vault::CredentialStore;

/// Execute the `change-master` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = vault_path(cli)?;
    let store = CredentialStore::open(&path);

    output::info("Enter your current master passphrase.");
    let old_passphrase = prompt_passphrase()?;

    output::info("Choose your new master passphrase.");
    let new_passphrase = prompt_new_passphrase()?;

    store.change_master(&new_passphrase, &old_passphrase)?;

    output::success("Master passphrase changed");

    Ok(())
}
