//! # Command Layer
//!
//! One module per user-facing operation. Each `run` takes the collection (and the
//! collaborators it needs) as plain arguments and returns a [`CmdResult`]; none of
//! them print or exit.
//!
//! Mutating commands hand every [`Change`] they cause to a [`Subscriber`] together
//! with the new state. In production that subscriber is the
//! [`ListStore`](crate::store::ListStore), so each change is saved as it happens.

use crate::collection::{Change, SnippetCollection, Subscriber};
use crate::config::SnipzConfig;
use crate::error::{Result, SnipzError};
use crate::index::{DisplayIndex, DisplaySnippet};
use crate::model::{Snippet, SnippetId};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod copy;
pub mod delete;
pub mod list;
pub mod move_snippet;
pub mod paste;
pub mod view;

#[derive(Debug, Clone)]
pub struct SnipzPaths {
    pub data_dir: PathBuf,
}

impl SnipzPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_snippets: Vec<Snippet>,
    pub listed_snippets: Vec<DisplaySnippet>,
    pub paths: Vec<PathBuf>,
    pub config: Option<SnipzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_snippets(mut self, snippets: Vec<DisplaySnippet>) -> Self {
        self.listed_snippets = snippets;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: SnipzConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Forwards a change, if any, to the subscriber. Returns whether there was one.
pub(crate) fn publish<P: Subscriber + ?Sized>(
    subscriber: &mut P,
    collection: &SnippetCollection,
    change: Option<Change>,
) -> Option<Change> {
    let change = change?;
    subscriber.notify(&change, collection.snippets());
    Some(change)
}

/// Resolves an index that must exist (read-only commands).
pub(crate) fn require_index(
    collection: &SnippetCollection,
    index: DisplayIndex,
) -> Result<SnippetId> {
    index
        .resolve(collection)
        .ok_or_else(|| SnipzError::Api(format!("Index {} not found", index)))
}
