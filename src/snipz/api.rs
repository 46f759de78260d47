//! # API Facade
//!
//! [`SnipzApi`] is the single entry point for UI clients. It owns the pieces of
//! state a session needs:
//!
//! - the [`SnippetCollection`], loaded from storage when the API is built,
//! - the [`ListStore`], subscribed to every change the collection reports,
//! - the [`Clipboard`],
//! - the loaded [`SnipzConfig`].
//!
//! Methods normalize inputs (display index strings → [`DisplayIndex`]) and
//! dispatch to `commands::*`. They return `Result<CmdResult>` and never print.
//!
//! `SnipzApi<S, C>` is generic over storage and clipboard:
//! - Production: `SnipzApi<FileStore, SystemClipboard>`
//! - Testing: `SnipzApi<InMemoryStore, MemoryClipboard>`

use crate::clipboard::Clipboard;
use crate::collection::SnippetCollection;
use crate::commands;
use crate::config::SnipzConfig;
use crate::error::{Result, SnipzError};
use crate::index::{parse_indexes, DisplayIndex};
use crate::input::InputField;
use crate::store::{KeyValueStore, ListStore};

pub struct SnipzApi<S: KeyValueStore, C: Clipboard> {
    collection: SnippetCollection,
    store: ListStore<S>,
    clipboard: C,
    paths: commands::SnipzPaths,
    config: SnipzConfig,
}

impl<S: KeyValueStore, C: Clipboard> SnipzApi<S, C> {
    pub fn new(backend: S, clipboard: C, paths: commands::SnipzPaths, config: SnipzConfig) -> Self {
        let store = ListStore::new(backend);
        let collection = SnippetCollection::from_snippets(store.load());
        Self {
            collection,
            store,
            clipboard,
            paths,
            config,
        }
    }

    pub fn add_snippet(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::add::run(
            &mut self.collection,
            &mut self.store,
            &mut self.clipboard,
            text,
            self.config.copy_on_add,
        )
    }

    /// Saves whatever is in `field` and clears it.
    pub fn add_from_input(&mut self, field: &mut InputField) -> Result<commands::CmdResult> {
        let text = field.take();
        self.add_snippet(&text)
    }

    pub fn list_snippets(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.collection)
    }

    pub fn view_snippets<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::view::run(&self.collection, &indexes)
    }

    pub fn copy_snippet(&mut self, index: &str) -> Result<commands::CmdResult> {
        let index: DisplayIndex = index.parse()?;
        commands::copy::run(&self.collection, &mut self.clipboard, index)
    }

    pub fn delete_snippets<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::delete::run(&mut self.collection, &mut self.store, &indexes)
    }

    pub fn move_snippet(&mut self, from: &str, to: &str) -> Result<commands::CmdResult> {
        let from: DisplayIndex = from.parse()?;
        let to: DisplayIndex = to.parse()?;
        commands::move_snippet::run(&mut self.collection, &mut self.store, from, to)
    }

    /// Fills `field` from the clipboard; see [`commands::paste::run`].
    pub fn paste_into(&mut self, field: &mut InputField) -> bool {
        commands::paste::run(&mut self.clipboard, field)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store_path(&self) -> Result<commands::CmdResult> {
        let path = self
            .store
            .path()
            .ok_or_else(|| SnipzError::Store("Storage has no file location".to_string()))?;
        Ok(commands::CmdResult::default().with_paths(vec![path]))
    }

    pub fn collection(&self) -> &SnippetCollection {
        &self.collection
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn store(&self) -> &ListStore<S> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, SnipzPaths};
