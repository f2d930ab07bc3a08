//! CLI adapter for memex
//!
//! Exposes the three corpus operations, the tool table and raw tool
//! calls on the command line. This module depends on `core/` and
//! `tools/`; neither depends on it.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!              +--------v---------+
//!              |     tools/       |
//!              | (grep/read/ls)   |
//!              +--------+---------+
//!                       |
//!              +--------v---------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::core::config::{Config, LoggingConfig};
use crate::memex::Memex;

/// memex - grep, read and ls over a document corpus
///
/// Loads every matching text file below the corpus root into memory
/// and answers grep, read and ls queries against it. The same
/// operations are available as LLM tools through `tools` and `call`.
#[derive(Parser, Debug)]
#[command(name = "memex")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "In-memory grep/read/ls over a document corpus", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Corpus root directory (overrides config and MEMEX_CORPUS_ROOT)
    #[arg(long, short = 'r', global = true)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, env = "MEMEX_FORMAT", default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
///
/// The first three match the tool names.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search every document for a pattern (case-insensitive, regex aware)
    Grep(commands::GrepArgs),

    /// Print a document with line numbers
    Read(commands::ReadArgs),

    /// List the immediate children of a directory
    Ls(commands::LsArgs),

    /// Show the tool definitions handed to an LLM
    Tools(commands::ToolsArgs),

    /// Invoke a tool by name with a JSON argument object
    Call(commands::CallArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  memex completions bash > ~/.local/share/bash-completion/completions/memex
    ///   zsh:   memex completions zsh > ~/.zfunc/_memex
    ///   fish:  memex completions fish > ~/.config/fish/completions/memex.fish
    Completions(commands::CompletionsArgs),
}

/// Install the stderr tracing subscriber
///
/// `MEMEX_LOG` wins over `RUST_LOG`; without either, `memex={level}`.
/// Calling this twice is harmless.
pub fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_env("MEMEX_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("memex={}", logging.level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // stdout carries command output
        .with_ansi(false);

    let _ = if logging.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Handle commands that don't need a corpus
    match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        Commands::Tools(args) => return commands::tools::execute(args, cli.format),
        _ => {}
    }

    // Load configuration
    let mut config = Config::load()?;
    if let Some(root) = cli.root {
        config.corpus.root = root;
    }

    init_logging(&config.logging);
    config.log_config();

    let memex = Memex::from_config(&config)?;

    // Execute command
    match cli.command {
        Commands::Grep(args) => commands::grep::execute(args, &memex, cli.format),
        Commands::Read(args) => commands::read::execute(args, &memex, cli.format),
        Commands::Ls(args) => commands::ls::execute(args, &memex, cli.format),
        Commands::Call(args) => commands::call::execute(args, &memex, cli.format),
        Commands::Tools(_) | Commands::Completions(_) => unreachable!(), // Handled above
    }
}
