//! `passkeep delete` — remove a credential from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{prompt_passphrase, vault_path, Cli};
use crate::errors::{PasskeepError, Result};
use crate::vault::CredentialStore;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, handle: &str, force: bool) -> Result<()> {
    let path = vault_path(cli)?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete credential '{handle}'?"))
            .default(false)
            .interact()
            .map_err(|e| PasskeepError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let passphrase = prompt_passphrase()?;
    let store = CredentialStore::open(&path);
    store.delete(handle, &passphrase)?;

    output::success(&format!("Deleted credential '{handle}'"));

    Ok(())
}
