//! # CLI Layer
//!
//! One possible UI client for snipz. This is the only code that knows about
//! stdin/stdout, terminal colors and exit codes.
//!
//! ## Where `add` gets its text
//!
//! 1. Words on the command line: `snipz add buy milk`
//! 2. Piped stdin: `git rev-parse HEAD | snipz add`
//! 3. The clipboard, when stdin is a terminal and no words were given, or with
//!    `--paste`
//!
//! Only one source is used. Whatever it yields, blank text is ignored without a
//! message.
//!
//! ## Structure
//!
//! - `run()`: parses arguments and dispatches (called by `main.rs`)
//! - `init_context()`: builds the `AppContext` from the data directory
//! - `handle_*()`: per-command handlers that call the API and print results

use super::render::{
    render_config, render_full_snippets, render_messages, render_snippet_list,
};
use super::setup::{print_help, Cli, Commands, CoreCommands, MiscCommands, OrderCommands};
use clap::Parser;
use snipz::api::{CmdResult, ConfigAction, SnipzApi};
use snipz::clipboard::SystemClipboard;
use snipz::config::SnipzConfig;
use snipz::error::Result;
use snipz::init::initialize;
use snipz::input::InputField;
use snipz::logging;
use snipz::store::fs::FileStore;
use std::io::{IsTerminal, Read};

struct AppContext {
    api: SnipzApi<FileStore, SystemClipboard>,
    config: SnipzConfig,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.help {
        return print_help(cli.command.as_ref().map(Commands::name));
    }

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return print_help(command.as_deref());
    }

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add { paste, text } => handle_add(&mut ctx, text, paste),
            CoreCommands::List => handle_list(&ctx),
            CoreCommands::View { indexes } => handle_view(&ctx, indexes),
            CoreCommands::Copy { index } => handle_copy(&mut ctx, index),
        },
        Some(Commands::Order(cmd)) => match cmd {
            OrderCommands::Move { from, to } => handle_move(&mut ctx, from, to),
            OrderCommands::Delete { indexes } => handle_delete(&mut ctx, indexes),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Path => handle_path(&ctx),
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Help { .. } => Ok(()),
        },
        None => handle_list(&ctx),
    }
}

fn init_context() -> Result<AppContext> {
    let ctx = initialize()?;
    let use_color = console::Term::stdout().features().colors_supported();
    if !use_color {
        colored::control::set_override(false);
    }

    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
        use_color,
    })
}

fn handle_add(ctx: &mut AppContext, words: Vec<String>, force_paste: bool) -> Result<()> {
    let mut field = InputField::new();

    if force_paste {
        ctx.api.paste_into(&mut field);
    } else if !words.is_empty() {
        field.set_text(words.join(" "));
    } else if !std::io::stdin().is_terminal() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        field.set_text(buffer);
    } else {
        ctx.api.paste_into(&mut field);
    }

    let result = ctx.api.add_from_input(&mut field)?;
    print_messages(ctx, &result);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_snippets()?;
    print!(
        "{}",
        render_snippet_list(&result.listed_snippets, ctx.config.line_width, ctx.use_color)
    );
    print_messages(ctx, &result);
    Ok(())
}

fn handle_view(ctx: &AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_snippets(&indexes)?;
    print!("{}", render_full_snippets(&result.listed_snippets, ctx.use_color));
    print_messages(ctx, &result);
    Ok(())
}

fn handle_copy(ctx: &mut AppContext, index: String) -> Result<()> {
    let result = ctx.api.copy_snippet(&index)?;
    print_messages(ctx, &result);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, from: String, to: String) -> Result<()> {
    let result = ctx.api.move_snippet(&from, &to)?;
    print_messages(ctx, &result);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_snippets(&indexes)?;
    print_messages(ctx, &result);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.store_path()?;
    for path in &result.paths {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_key = match &action {
        ConfigAction::ShowKey(key) => Some(key.clone()),
        _ => None,
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        match show_key {
            Some(key) => {
                if let Some(value) = config.get(&key) {
                    println!("{}", value);
                }
            }
            None => print!("{}", render_config(&config.entries())),
        }
    }
    print_messages(ctx, &result);
    Ok(())
}

fn print_messages(ctx: &AppContext, result: &CmdResult) {
    let output = render_messages(&result.messages, ctx.use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}
