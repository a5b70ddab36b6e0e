//! tolk CLI entry point.
//!
//! Provides command-line tools for working with tolk resource directories:
//! - `tolk cultures` - List the cultures found in a resource directory
//! - `tolk translate` - Resolve one key the way an application would
//! - `tolk check` - Validate .tolk file syntax
//! - `tolk coverage` - Report translation coverage per culture

mod commands;
mod config;
mod output;

use std::io::stderr;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_cultures, run_translate, CheckArgs, CoverageArgs, CulturesArgs,
    TranslateArgs,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// tolk resource directory tools.
#[derive(Debug, Parser)]
#[command(name = "tolk")]
#[command(about = "tolk resource directory tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "TOLK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the cultures that have resource files
    Cultures(CulturesArgs),
    /// Translate a single resource key
    Translate(TranslateArgs),
    /// Check .tolk file syntax
    Check(CheckArgs),
    /// Report translation coverage across cultures
    Coverage(CoverageArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` or the verbosity flag.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_target(verbose)
        .with_writer(stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = config::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Cultures(args) => run_cultures(args, config),
        Commands::Translate(args) => run_translate(args, config),
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args, config),
    });

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
