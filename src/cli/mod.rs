//! Command-line interface for `issued`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::{self, CliOverrides};
use crate::logging;

/// `issued` - in-memory issue tracking service.
#[derive(Parser, Debug)]
#[command(name = "issued")]
#[command(
    author,
    version,
    about = "In-memory issue tracking HTTP API",
    long_about = None,
    after_help = "Issues live in memory only and are lost when the server stops."
)]
pub struct Cli {
    /// Path to a YAML config file (default: ./issued.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:8000
    #[arg(long, global = true)]
    pub bind: Option<String>,

    /// Prefix for generated issue IDs
    #[arg(long, global = true)]
    pub id_prefix: Option<String>,

    /// Emit logs as JSON lines (`--log-json=false` turns it off)
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub log_json: Option<bool>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run (default: serve)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve,

    /// Print the effective configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Print as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// CLI-level configuration overrides.
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_path: self.config.clone(),
            bind: self.bind.clone(),
            id_prefix: self.id_prefix.clone(),
            log_json: self.log_json,
        }
    }
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(&cli.overrides())?;

    logging::init_logging(cli.verbose, cli.quiet, config.log_json)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    match cli.command {
        Some(Commands::Serve) | None => commands::serve::execute(&config),
        Some(Commands::Config(args)) => commands::config::execute(&args, &config),
    }
}
