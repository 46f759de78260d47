//! # Storage Layer
//!
//! Snippets persist through a plain key-value substrate, the same contract a
//! browser's local storage offers: `get(key)` returns a string or nothing,
//! `set(key, value)` replaces whatever was there. The [`KeyValueStore`] trait
//! captures that contract so the rest of the crate never touches the filesystem
//! directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `<key>.json` file per key inside
//!   the data directory.
//! - [`memory::InMemoryStore`]: for tests, no persistence.
//!
//! ## The snippet list record
//!
//! [`ListStore`] owns the one record this application writes. Under the key
//! [`STORAGE_KEY`] it stores a compact JSON array, one `{"text": .., "id": ..}`
//! object per snippet, in display order:
//!
//! ```text
//! [{"text":"buy milk","id":1718000000123},{"text":"call mom","id":1717999999001}]
//! ```
//!
//! There is no envelope and no version field. Every save rewrites the whole
//! array. A missing, unreadable or malformed record loads as an empty list.

use crate::collection::{Change, Subscriber};
use crate::error::Result;
use crate::model::Snippet;
use std::path::PathBuf;
use tracing::{debug, error, warn};

pub mod fs;
pub mod memory;

/// Key under which the snippet list is stored.
pub const STORAGE_KEY: &str = "clippy-items";

/// Abstract string key-value storage.
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` if nothing was ever written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Where the value for `key` lives, for stores that have a location.
    fn key_path(&self, _key: &str) -> Option<PathBuf> {
        None
    }
}

/// Reads and writes the snippet list record.
#[derive(Debug)]
pub struct ListStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> ListStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.backend.key_path(STORAGE_KEY)
    }

    /// Loads the stored list. Never fails: problems degrade to an empty list.
    pub fn load(&self) -> Vec<Snippet> {
        let raw = match self.backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read snippet list, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Snippet>>(&raw) {
            Ok(snippets) => {
                debug!(count = snippets.len(), "snippet list loaded");
                snippets
            }
            Err(e) => {
                warn!(error = %e, "stored snippet list is malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Serializes the full list and overwrites the stored record.
    pub fn save(&mut self, snippets: &[Snippet]) -> Result<()> {
        let value = serde_json::to_string(snippets)?;
        self.backend.set(STORAGE_KEY, &value)?;
        debug!(count = snippets.len(), "snippet list saved");
        Ok(())
    }
}

impl<S: KeyValueStore> Subscriber for ListStore<S> {
    fn notify(&mut self, change: &Change, snippets: &[Snippet]) {
        if let Err(e) = self.save(snippets) {
            error!(error = %e, ?change, "failed to save snippet list");
        }
    }
}
