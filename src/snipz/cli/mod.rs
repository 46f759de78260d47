//! # CLI
//!
//! The binary's half of snipz. Modules:
//!
//! - `setup`: argument parsing via clap, grouped help
//! - `commands`: context wiring and per-command handlers
//! - `render`: terminal output

mod commands;
mod render;
pub mod setup;

pub use commands::run;
