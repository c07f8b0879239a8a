//! Entry and Vault types stored inside a vault file.
//!
//! On the wire an entry is the positional pair `[usage_count, secret]`
//! keyed by its handle; in memory it is a named struct so no code ever
//! indexes into a two-element list by position.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single credential stored in the vault, keyed by its handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u64, String)", into = "(u64, String)")]
pub struct Entry {
    /// Number of times this entry's secret has been retrieved.
    /// Never decremented; survives secret replacement.
    pub usage_count: u64,

    /// The stored secret. Opaque to the store.
    pub secret: String,
}

impl Entry {
    /// A fresh entry that has never been retrieved.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            usage_count: 0,
            secret: secret.into(),
        }
    }
}

impl From<(u64, String)> for Entry {
    fn from((usage_count, secret): (u64, String)) -> Self {
        Self {
            usage_count,
            secret,
        }
    }
}

impl From<Entry> for (u64, String) {
    fn from(entry: Entry) -> Self {
        (entry.usage_count, entry.secret)
    }
}

/// The decrypted contents of a vault file: handle -> entry.
///
/// Serializes as a JSON object whose keys are the handles:
/// `{ "<handle>": [<usage_count>, "<secret>"], ... }`.  Iteration order
/// is not part of the contract; callers sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vault {
    entries: BTreeMap<String, Entry>,
}

impl Vault {
    /// An empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry by handle.
    pub fn get(&self, handle: &str) -> Option<&Entry> {
        self.entries.get(handle)
    }

    /// Look up an entry by handle, mutably.
    pub fn get_mut(&mut self, handle: &str) -> Option<&mut Entry> {
        self.entries.get_mut(handle)
    }

    /// Insert an entry, replacing any previous one under the same handle.
    pub fn insert(&mut self, handle: String, entry: Entry) {
        self.entries.insert(handle, entry);
    }

    /// Remove and return the entry for `handle`, if present.
    pub fn remove(&mut self, handle: &str) -> Option<Entry> {
        self.entries.remove(handle)
    }

    /// Returns `true` if the vault has an entry for `handle`.
    pub fn contains(&self, handle: &str) -> bool {
        self.entries.contains_key(handle)
    }

    /// Number of entries in the vault.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the vault holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(handle, entry)` pairs in no guaranteed order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.entries.iter()
    }
}
