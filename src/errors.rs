use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in Passkeep.
#[derive(Debug, Error)]
pub enum PasskeepError {
    // --- Vault errors ---
    #[error("Authentication failed — wrong master passphrase or corrupted vault")]
    AuthFailed,

    #[error("Handle '{0}' not found in the vault")]
    HandleNotFound(String),

    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for Passkeep results.
pub type Result<T> = std::result::Result<T, PasskeepError>;
