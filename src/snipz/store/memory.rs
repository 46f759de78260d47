use super::KeyValueStore;
use crate::error::{Result, SnipzError};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every `set` fail, like a full disk or exceeded quota.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(SnipzError::Store("storage quota exceeded".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Snippet, SnippetId};
    use crate::store::STORAGE_KEY;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        snippets: Vec<Snippet>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                snippets: Vec::new(),
            }
        }

        /// Appends snippets with ids 1..=count and texts "Snippet 1".."Snippet N".
        pub fn with_snippets(mut self, count: usize) -> Self {
            let start = self.snippets.len() as i64;
            for i in 1..=count as i64 {
                let id = start + i;
                self.snippets
                    .push(Snippet::new(SnippetId(id), format!("Snippet {}", id)));
            }
            self.flush()
        }

        pub fn with_snippet(mut self, id: i64, text: &str) -> Self {
            self.snippets.push(Snippet::new(SnippetId(id), text));
            self.flush()
        }

        pub fn with_raw(mut self, raw: &str) -> Self {
            self.store.set(STORAGE_KEY, raw).unwrap();
            self
        }

        fn flush(mut self) -> Self {
            let raw = serde_json::to_string(&self.snippets).unwrap();
            self.store.set(STORAGE_KEY, &raw).unwrap();
            self
        }
    }
}
