//! # Display Indexes
//!
//! Users never see snippet ids. Listings number snippets from 1 in their current
//! order, and commands take those numbers back. Because the order is
//! user-controlled, an index is only meaningful against the collection it was
//! listed from; commands resolve indexes to ids before mutating anything, so a
//! multi-index delete removes the snippets the user saw, not whatever slides into
//! their slots.

use crate::collection::SnippetCollection;
use crate::error::{Result, SnipzError};
use crate::model::{Snippet, SnippetId};
use std::fmt;
use std::str::FromStr;

/// 1-based position in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl DisplayIndex {
    /// 0-based position, or `None` for the out-of-range index 0.
    pub fn position(&self) -> Option<usize> {
        self.0.checked_sub(1)
    }

    pub fn from_position(position: usize) -> Self {
        DisplayIndex(position + 1)
    }

    /// The id of the snippet shown at this index, if there is one.
    pub fn resolve(&self, collection: &SnippetCollection) -> Option<SnippetId> {
        collection.id_at(self.position()?)
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = SnipzError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_end_matches('.');
        match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(DisplayIndex(n)),
            _ => Err(SnipzError::Api(format!("Invalid index: {}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySnippet {
    pub index: DisplayIndex,
    pub snippet: Snippet,
}

pub fn index_snippets(snippets: &[Snippet]) -> Vec<DisplaySnippet> {
    snippets
        .iter()
        .enumerate()
        .map(|(pos, snippet)| DisplaySnippet {
            index: DisplayIndex::from_position(pos),
            snippet: snippet.clone(),
        })
        .collect()
}

pub fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}
