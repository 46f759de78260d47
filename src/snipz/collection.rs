//! # Snippet Collection
//!
//! The in-memory, user-ordered list of snippets. Order is never derived from a
//! key: new snippets go to the front, and from then on the user decides.
//!
//! Mutations report what they did as a [`Change`] (or `None` for a no-op) instead
//! of writing anywhere themselves. Whoever owns the collection forwards changes to
//! its [`Subscriber`]s; persistence is one such subscriber (see
//! [`crate::store::ListStore`]). That keeps this module free of storage concerns and
//! trivially testable.
//!
//! Lookups are linear scans. Collections hold tens of items, not thousands.

use crate::model::{IdGenerator, Snippet, SnippetId};
use crate::reorder::array_move;
use tracing::{debug, warn};

/// What a successful mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(SnippetId),
    Removed(Snippet),
    Moved {
        id: SnippetId,
        from: usize,
        to: usize,
    },
}

/// Receives every change together with the collection state after it.
pub trait Subscriber {
    fn notify(&mut self, change: &Change, snippets: &[Snippet]);
}

#[derive(Debug, Clone, Default)]
pub struct SnippetCollection {
    snippets: Vec<Snippet>,
    ids: IdGenerator,
}

impl SnippetCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from previously stored snippets, keeping their order.
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant holds
    /// even for hand-edited storage.
    pub fn from_snippets(snippets: Vec<Snippet>) -> Self {
        let mut unique: Vec<Snippet> = Vec::with_capacity(snippets.len());
        for snippet in snippets {
            if unique.iter().any(|s| s.id == snippet.id) {
                debug!(id = %snippet.id, "dropping duplicate snippet id");
                continue;
            }
            unique.push(snippet);
        }
        let ids = IdGenerator::seeded(&unique);
        Self {
            snippets: unique,
            ids,
        }
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn get(&self, id: SnippetId) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: SnippetId) -> Option<usize> {
        self.snippets.iter().position(|s| s.id == id)
    }

    pub fn id_at(&self, position: usize) -> Option<SnippetId> {
        self.snippets.get(position).map(|s| s.id)
    }

    /// Prepends a new snippet. Blank text is ignored, as is any add once the
    /// largest possible id is taken.
    pub fn add(&mut self, text: &str) -> Option<Change> {
        if text.trim().is_empty() {
            return None;
        }
        let Some(id) = self.ids.next_id() else {
            warn!("no snippet id left above the newest one, not saving");
            return None;
        };
        self.snippets.insert(0, Snippet::new(id, text));
        debug!(%id, len = self.snippets.len(), "snippet added");
        Some(Change::Added(id))
    }

    pub fn remove(&mut self, id: SnippetId) -> Option<Change> {
        let pos = self.position(id)?;
        let removed = self.snippets.remove(pos);
        debug!(%id, "snippet removed");
        Some(Change::Removed(removed))
    }

    /// Moves `from_id` into the slot currently held by `to_id`, shifting the
    /// snippets in between by one.
    pub fn reorder(&mut self, from_id: SnippetId, to_id: SnippetId) -> Option<Change> {
        if from_id == to_id {
            return None;
        }
        let from = self.position(from_id)?;
        let to = self.position(to_id)?;
        array_move(&mut self.snippets, from, to);
        debug!(id = %from_id, from, to, "snippet moved");
        Some(Change::Moved {
            id: from_id,
            from,
            to,
        })
    }
}
