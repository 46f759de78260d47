use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a snippet: the creation time in milliseconds since the epoch,
/// bumped forward when two snippets are created within the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetId(pub i64);

impl SnippetId {
    /// Creation time recovered from the id. `None` for ids outside chrono's range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.0)
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A saved piece of text.
///
/// The field order matters: records are written as `{"text": .., "id": ..}`
/// and anything else in a record is rejected on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snippet {
    pub text: String,
    pub id: SnippetId,
}

impl Snippet {
    pub fn new(id: SnippetId, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id,
        }
    }

    /// Single-line preview used by listings.
    pub fn preview(&self) -> String {
        self.text
            .trim()
            .chars()
            .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
            .collect()
    }
}

/// Hands out strictly increasing ids.
///
/// Ids follow the wall clock, but never repeat or go backwards: a request in the
/// same millisecond as the previous one (or after a clock step back) gets
/// `last + 1`.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts after the highest id already present.
    pub fn seeded<'a>(snippets: impl IntoIterator<Item = &'a Snippet>) -> Self {
        Self {
            last: snippets.into_iter().map(|s| s.id.0).max(),
        }
    }

    pub fn next_id(&mut self) -> Option<SnippetId> {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// `None` once the id space above the last id is used up.
    pub fn next_at(&mut self, now_millis: i64) -> Option<SnippetId> {
        let id = match self.last {
            Some(last) if now_millis <= last => last.checked_add(1)?,
            _ => now_millis,
        };
        self.last = Some(id);
        Some(SnippetId(id))
    }
}
