//! Vault module — encrypted credential storage.
//!
//! This module provides:
//! - `Entry` and `Vault` types (`entry`)
//! - The vault file layout and atomic writes (`format`)
//! - The lock-guarded `CredentialStore` (`store`)

pub mod entry;
pub mod format;
pub mod store;

// Re-export the most commonly used items.
pub use entry::{Entry, Vault};
pub use store::CredentialStore;
