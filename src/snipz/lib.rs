//! # Snipz Architecture
//!
//! Snipz keeps a short, user-ordered list of text snippets that can be copied back
//! to the clipboard. Like its storage, the core is UI-agnostic: the CLI in `cli/`
//! is one client of the library, not the library itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session state: collection, store, clipboard     │
//! │  - Normalizes inputs (display indexes → snippet ids)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: collection.rs, reorder.rs, clipboard.rs, input.rs    │
//! │  Storage: store/ (KeyValueStore, ListStore)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Change flow
//!
//! The collection never writes to storage itself. Every mutation returns a
//! [`collection::Change`]; the command layer forwards it, with the new state, to a
//! [`collection::Subscriber`]. [`store::ListStore`] is that subscriber in
//! production and rewrites the stored list on each change.
//!
//! ## Failure policy
//!
//! Nothing in the core is fatal. Blank input, unknown ids and drops outside the
//! list are silent no-ops. Unreadable storage loads as an empty list. Clipboard
//! and storage write failures are logged through `tracing` and otherwise
//! ignored. See [`logging`] for where those logs go.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`collection`]: The ordered snippet list and its change events
//! - [`reorder`]: Drag gesture → array move
//! - [`store`]: Key-value storage and the snippet list record
//! - [`clipboard`]: System clipboard bridge
//! - [`input`]: Pending input with two-phase paste
//! - [`index`]: 1-based display indexes
//! - [`model`]: `Snippet`, `SnippetId`, id generation
//! - [`config`]: Configuration file
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod input;
pub mod logging;
pub mod model;
pub mod reorder;
pub mod store;
