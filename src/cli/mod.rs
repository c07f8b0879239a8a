//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PasskeepError, Result};

/// Minimum length for newly chosen master passphrases.
const MIN_PASSPHRASE_LEN: usize = 8;

/// Environment variable consulted before any interactive prompt.
pub const PASSPHRASE_ENV: &str = "PASSKEEP_PASSPHRASE";

/// Passkeep CLI: password-protected credential store.
#[derive(Parser)]
#[command(
    name = "passkeep",
    about = "Password-protected credential store",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: .passkeep, or the configured value)
    #[arg(long, global = true)]
    pub vault_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new, empty vault
    Init,

    /// Add a credential, or replace an existing one's secret
    Add {
        /// Handle identifying the credential (e.g. "email")
        handle: String,
        /// Secret value (omit for interactive prompt)
        secret: Option<String>,
    },

    /// Print a credential's secret
    Get {
        /// Handle to look up
        handle: String,
    },

    /// List all handles, most used first
    List,

    /// Delete a credential
    Delete {
        /// Handle to delete
        handle: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Change the vault's master passphrase
    ChangeMaster,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Build the full path to the vault file from the CLI arguments.
///
/// `--vault-dir` overrides the directory from `.passkeep.toml`; the
/// file name always comes from settings.
pub fn vault_path(cli: &Cli) -> Result<std::path::PathBuf> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    match &cli.vault_dir {
        Some(dir) => Ok(cwd.join(dir).join(&settings.vault_file)),
        None => Ok(settings.vault_path(&cwd)),
    }
}

/// Get the master passphrase, trying in order:
/// 1. `PASSKEEP_PASSPHRASE` env var (scripting/CI)
/// 2. Interactive hidden prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSPHRASE_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master passphrase")
        .interact()
        .map_err(|e| PasskeepError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master passphrase with confirmation (used during
/// `init` and `change-master`).
///
/// Also respects `PASSKEEP_PASSPHRASE` for scripted usage.
/// Enforces a minimum passphrase length.
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_new_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSPHRASE_ENV) {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSPHRASE_LEN {
                return Err(PasskeepError::CommandFailed(format!(
                    "passphrase must be at least {MIN_PASSPHRASE_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let passphrase = dialoguer::Password::new()
            .with_prompt("Choose master passphrase")
            .with_confirmation(
                "Confirm master passphrase",
                "Passphrases do not match, try again",
            )
            .interact()
            .map_err(|e| PasskeepError::CommandFailed(format!("passphrase prompt: {e}")))?;

        if passphrase.len() < MIN_PASSPHRASE_LEN {
            output::warning(&format!(
                "Passphrase must be at least {MIN_PASSPHRASE_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(passphrase));
    }
}
