//! Command-line interface for sms-segments
//!
//! Provides `analyze` and `replace` subcommands over the message
//! classifier and replacement tables.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod analyze;
mod replace;
mod utils;

/// Analyze SMS text for encoding, segment counts, and replaceable characters
#[derive(Parser)]
#[command(name = "sms-segments")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a message and report its segment accounting
    Analyze(analyze::AnalyzeArgs),

    /// Rewrite a message using a replacement table
    Replace(replace::ReplaceArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Analyze(args) => analyze::run(args),
        Commands::Replace(args) => replace::run(args),
    }
}
