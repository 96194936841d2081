//! # CLI Layer
//!
//! This module is **one possible UI client** for anilist. It is the only place
//! that:
//! - Knows about terminal I/O (stdout, stderr, stdin for the shell)
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Parse arguments, set up logging and context, dispatch
//! - `init_context()`: Builds `AppContext` from the data dir and config
//! - `dispatch()`: Routes one parsed command to its handler
//! - `run_shell()`: The interactive session; one `AppContext` serves every
//!   line, so the displayed list survives between commands
//! - `handle_*()`: Per-command handlers that call the API and render output

use super::render::{print_animes, print_messages, render_text_list};
use super::setup::{Cli, Commands};
use anilist::api::{AnilistApi, CmdMessage, CmdResult, EditRequest};
use anilist::config::{resolve_data_dir, AnilistConfig};
use anilist::error::Result;
use anilist::store::fs::FileStore;
use clap::Parser;
use colored::Colorize;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ANILIST_LOG";
const SHELL_PROMPT: &str = "anilist> ";

struct AppContext {
    api: AnilistApi<FileStore>,
    data_dir: PathBuf,
    config: AnilistConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir()?;
    let config = AnilistConfig::load(&data_dir)?;
    init_logging(cli.verbose, &config);

    let mut ctx = init_context(data_dir, config)?;
    match cli.command {
        Some(Commands::Shell) => run_shell(&mut ctx),
        command => dispatch(&mut ctx, command),
    }
}

fn init_logging(verbose: bool, config: &AnilistConfig) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(data_dir: PathBuf, config: AnilistConfig) -> Result<AppContext> {
    let store = FileStore::new(config.data_path(&data_dir));
    tracing::debug!(path = %store.path().display(), "Opening anime list");
    let api = AnilistApi::new(store)?;

    Ok(AppContext {
        api,
        data_dir,
        config,
    })
}

fn dispatch(ctx: &mut AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Add {
            name,
            status,
            episode,
            genres,
        }) => handle_add(ctx, name.join(" "), status, episode, genres),
        Some(Commands::Delete { index }) => show(ctx.api.delete_anime(&index)?),
        Some(Commands::Edit {
            index,
            name,
            status,
            episode,
        }) => {
            let request = EditRequest {
                name,
                status,
                episode,
            };
            show(ctx.api.edit_anime(&index, &request)?)
        }
        Some(Commands::Rename { index, name }) => show(ctx.api.rename(&index, &name.join(" "))?),
        Some(Commands::Status { index, status }) => show(ctx.api.set_status(&index, &status)?),
        Some(Commands::Update { index, episode }) => {
            show(ctx.api.update_episode(&index, &episode)?)
        }
        Some(Commands::Genre {
            index,
            operation,
            genres,
        }) => show(ctx.api.genre(&index, &operation, &genres)?),
        Some(Commands::Find { keywords }) => handle_listing(ctx.api.find(&keywords)?),
        Some(Commands::List { genres, status }) => {
            handle_listing(ctx.api.list(&genres, status.as_deref())?)
        }
        Some(Commands::Clear) => show(ctx.api.clear()?),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
        Some(Commands::Shell) => {
            println!("{}", "Already in a shell session.".yellow());
            Ok(())
        }
        None => handle_listing(ctx.api.list::<String>(&[], None)?),
    }
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    status: Option<String>,
    episode: Option<String>,
    genres: Vec<String>,
) -> Result<()> {
    let result = ctx
        .api
        .add_anime(&name, status.as_deref(), episode.as_deref(), &genres)?;
    show(result)
}

fn show(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn handle_listing(result: CmdResult) -> Result<()> {
    print_animes(&result.listed_animes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            let lines: Vec<String> = AnilistConfig::KEYS
                .iter()
                .map(|k| format!("{} = {}", k, ctx.config.get(k).unwrap_or_default()))
                .collect();
            print!("{}", render_text_list(&lines, "No configuration values."));
        }
        (Some(key), None) => {
            println!("{} = {}", key, ctx.config.get(&key)?);
        }
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            tracing::info!(key = %key, value = %value, "Config updated");
            println!("{}", format!("{} set to {}", key, ctx.config.get(&key)?).green());
        }
    }
    Ok(())
}

/// Reads commands from stdin until `exit`, `quit` or end of input.
///
/// Errors are reported and the session goes on; the model is only ever
/// changed by commands that succeed.
fn run_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("{}", SHELL_PROMPT);
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }

        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                continue;
            }
        };

        let cli = match Cli::try_parse_from(std::iter::once("anilist".to_string()).chain(words)) {
            Ok(cli) => cli,
            Err(e) => {
                // --help and --version land here too
                let _ = e.print();
                continue;
            }
        };

        if cli.verbose {
            print_messages(&[CmdMessage::warning(
                "-v has no effect inside the shell; start the shell with -v instead",
            )]);
        }

        tracing::debug!(line, "Shell command");
        if let Err(e) = dispatch(ctx, cli.command) {
            eprintln!("{} {}", "Error:".red(), e);
        }
    }

    Ok(())
}
