//! Command-line interface for testconf
//!
//! Provides `resolve` and `defaults` subcommands plus shell completion
//! generation.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod defaults;
mod resolve;
mod utils;

/// Resolve the effective test-runner configuration
#[derive(Parser)]
#[command(name = "testconf")]
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
    /// Merge base and override config layers into the effective configuration
    Resolve(resolve::ResolveArgs),

    /// Print the stock defaults (exclude globs, sample override layer)
    Defaults(defaults::DefaultsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
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
        Commands::Resolve(args) => resolve::run(args),
        Commands::Defaults(args) => defaults::run(args),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
