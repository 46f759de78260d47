//! Argument parsing.
//!
//! Help is rendered by hand from [`HELP_SECTIONS`] so commands can be shown in
//! sections; per-command help still comes from clap.

use clap::{CommandFactory, Parser, Subcommand};
use snipz::error::{Result, SnipzError};
use std::fmt::Write as _;
use std::sync::OnceLock;

const ABOUT: &str = "Save, reorder and re-copy clipboard snippets";

/// Top-level help sections and the commands listed under each.
pub const HELP_SECTIONS: &[(&str, &[&str])] = &[
    ("Snippet Commands", &["add", "list", "view", "copy"]),
    ("Ordering Commands", &["move", "delete"]),
    ("Miscellaneous", &["path", "config", "help"]),
];

/// `0.3.2` for a tagged release; `0.3.2 (abc1234 2024-01-15 14:30)` for any
/// other build with git metadata.
fn describe_version(version: &str, hash: &str, commit_date: &str, release: bool) -> String {
    if release || hash.is_empty() {
        return version.to_string();
    }
    let build = [hash, commit_date]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} ({})", version, build)
}

fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        describe_version(
            env!("CARGO_PKG_VERSION"),
            env!("GIT_HASH"),
            env!("GIT_COMMIT_DATE"),
            env!("IS_RELEASE") == "true",
        )
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "snipz",
    bin_name = "snipz",
    version = version(),
    about = ABOUT,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// The sectioned top-level help text.
pub fn grouped_help() -> String {
    let cmd = Cli::command();
    let mut out = String::new();

    let _ = writeln!(out, "snipz {}\n{}\n", version(), ABOUT);
    let _ = writeln!(out, "Usage: snipz [OPTIONS] [COMMAND]");

    for (title, names) in HELP_SECTIONS {
        let _ = writeln!(out, "\n{}:", title);
        for sub in names.iter().filter_map(|name| cmd.find_subcommand(name)) {
            let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
            let _ = writeln!(out, "  {:<12} {}", sub.get_name(), about);
        }
    }

    let _ = writeln!(out, "\nOptions:");
    for (flags, text) in [
        ("-v, --verbose", "Verbose output"),
        ("-h, --help", "Print help"),
        ("-V, --version", "Print version"),
    ] {
        let _ = writeln!(out, "  {:<16} {}", flags, text);
    }
    out
}

/// Prints help for `name` (a command or one of its aliases), or the sectioned
/// help when `name` is `None`.
pub fn print_help(name: Option<&str>) -> Result<()> {
    let Some(name) = name else {
        print!("{}", grouped_help());
        return Ok(());
    };
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut(name)
        .ok_or_else(|| SnipzError::Api(format!("Unknown command: {}", name)))?;
    print!("{}", sub.render_help());
    Ok(())
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Order(OrderCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Core(c) => match c {
                CoreCommands::Add { .. } => "add",
                CoreCommands::List => "list",
                CoreCommands::View { .. } => "view",
                CoreCommands::Copy { .. } => "copy",
            },
            Commands::Order(c) => match c {
                OrderCommands::Move { .. } => "move",
                OrderCommands::Delete { .. } => "delete",
            },
            Commands::Misc(c) => match c {
                MiscCommands::Path => "path",
                MiscCommands::Config { .. } => "config",
                MiscCommands::Help { .. } => "help",
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Save a new snippet (from arguments, piped stdin, or the clipboard)
    #[command(aliases = ["a", "n"], display_order = 1)]
    Add {
        /// Take the text from the clipboard even if stdin is piped
        #[arg(short, long)]
        paste: bool,

        /// Snippet words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// List snippets
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Print the full text of one or more snippets
    #[command(alias = "v", display_order = 3)]
    View {
        /// Indexes of the snippets (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Copy a snippet to the clipboard
    #[command(aliases = ["c", "cp"], display_order = 4)]
    Copy {
        /// Index of the snippet
        index: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrderCommands {
    /// Move a snippet to the position of another
    #[command(alias = "mv", display_order = 10)]
    Move {
        /// Index of the snippet to move
        from: String,

        /// Index whose position it should take
        to: String,
    },

    /// Delete one or more snippets
    #[command(alias = "rm", display_order = 11)]
    Delete {
        /// Indexes of the snippets (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Print the path of the snippet store
    #[command(display_order = 20)]
    Path,

    /// Get or set configuration
    #[command(display_order = 21)]
    Config {
        /// Configuration key (line-width, copy-on-add)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for snipz or a subcommand
    #[command(display_order = 22)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
