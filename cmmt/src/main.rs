//! cmmt - command-line driver for the C-- lexer.
//!
//! Parses arguments with clap, sets up logging and configuration, and
//! dispatches to the `tokens` or `check` command.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::stderr_color, run_check, run_tokens, CheckArgs, TokensArgs};
use config::{Config, OutputFormat};
use error::{CmmtError, Result};

/// cmmt - tools for C-- source files
///
/// Dumps the token stream of a file or checks many files for lexical errors.
#[derive(Parser, Debug)]
#[command(name = "cmmt")]
#[command(author = "C-- Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tools for C-- source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CMMT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CMMT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CMMT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the cmmt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every token of a file
    ///
    /// Writes one token per line, or a JSON array with `--format json`.
    /// Lexical errors are reported on stderr and make the command fail.
    Tokens(TokensCommand),

    /// Scan files for lexical errors
    ///
    /// Files are scanned in parallel; each gets a line with its error and
    /// warning counts.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to scan
    file: PathBuf,

    /// Write tokens to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Prefix each token with its line and column
    #[arg(long)]
    positions: bool,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,

    /// Print token counts per kind
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let verbose = cli.verbose || config.verbose;
    init_logging(verbose, cli.no_color)?;

    let color = stderr_color(cli.no_color);
    execute_command(cli.command, verbose, color, config)
}

/// Initialize the logging system on stderr.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CmmtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, color, config),
        Commands::Check(args) => execute_check(args, verbose, color, config),
    }
}

/// Execute the tokens command; flags override the `[output]` section.
fn execute_tokens(args: TokensCommand, verbose: bool, color: bool, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        file: args.file,
        output: args.output,
        positions: args.positions || config.output.positions,
        format: args.format.unwrap_or(config.output.format),
        color,
        verbose,
    };
    run_tokens(tokens_args, config.lexer_config()?)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, color: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        files: args.files,
        jobs: args.jobs.unwrap_or(config.check.jobs),
        summary: args.summary,
        color,
        verbose,
    };
    run_check(check_args, config.lexer_config()?)
}
