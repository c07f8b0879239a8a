//! `passkeep add` — add a credential or replace an existing secret.

use std::io::{self, IsTerminal, Read};

use crate::cli::output;
use crate::cli::{prompt_passphrase, vault_path, Cli};
use crate::errors::{PasskeepError, Result};
use crate::vault::CredentialStore;

/// Execute the `add` command.
pub fn execute(cli: &Cli, handle: &str, secret: Option<&str>) -> Result<()> {
    let path = vault_path(cli)?;

    // Determine the secret value from one of three sources.
    let secret_value = if let Some(s) = secret {
        // Source 1: Inline value on the command line.
        output::warning("Secret provided on command line — it may appear in shell history.");
        s.to_string()
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim_end().to_string()
    } else {
        // Source 3: Interactive hidden prompt (default).
        dialoguer::Password::new()
            .with_prompt(format!("Enter secret for {handle}"))
            .interact()
            .map_err(|e| PasskeepError::CommandFailed(format!("input prompt: {e}")))?
    };

    let passphrase = prompt_passphrase()?;
    let store = CredentialStore::open(&path);

    let existed = store.load(&passphrase)?.contains(handle);
    store.add_or_replace(handle, &secret_value, &passphrase)?;

    if existed {
        output::success(&format!(
            "Secret for '{handle}' replaced (usage count kept)"
        ));
    } else {
        output::success(&format!("Credential '{handle}' added"));
    }

    Ok(())
}
