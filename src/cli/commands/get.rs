//! `passkeep get` — retrieve and print a single credential's secret.

use crate::cli::{prompt_passphrase, vault_path, Cli};
use crate::errors::Result;
use crate::vault::CredentialStore;

/// Execute the `get` command.
pub fn execute(cli: &Cli, handle: &str) -> Result<()> {
    let path = vault_path(cli)?;
    let passphrase = prompt_passphrase()?;

    // Retrieval bumps the handle's usage count, which feeds the
    // most-used-first ordering of `list`.
    let store = CredentialStore::open(&path);
    let secret = store.get_secret(handle, &passphrase)?;
    println!("{secret}");

    Ok(())
}
