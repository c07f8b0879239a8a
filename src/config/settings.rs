use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PasskeepError, Result};

/// Project-level configuration, loaded from `.passkeep.toml`.
///
/// Every field has a sensible default so Passkeep works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the working directory) holding the vault file.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// File name of the vault inside `vault_dir`.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    ".passkeep".to_string()
}

fn default_vault_file() -> String {
    "credentials.vault".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            vault_file: default_vault_file(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".passkeep.toml";

    /// Load settings from `<project_dir>/.passkeep.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PasskeepError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the vault file under `project_dir`.
    ///
    /// Example: `project_dir/.passkeep/credentials.vault`
    pub fn vault_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_dir).join(&self.vault_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
