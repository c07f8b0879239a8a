//! `passkeep list` — display all handles ranked by usage.

use crate::cli::output;
use crate::cli::{prompt_passphrase, vault_path, Cli};
use crate::errors::Result;
use crate::vault::CredentialStore;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = vault_path(cli)?;
    let passphrase = prompt_passphrase()?;

    let store = CredentialStore::open(&path);
    let mut handles = store.list_handles(&passphrase)?;

    // The store imposes no order. Most used first; ties fall back to
    // handle order so the listing is stable.
    handles.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

    output::info(&format!("{} credential(s)", handles.len()));
    output::print_handles_table(&handles);

    Ok(())
}
