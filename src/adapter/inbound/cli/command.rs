//! Command-line interface definitions.
//!
//! Defines the CLI structure for taskpulse using `clap`. The `run` command
//! is what the external scheduler invokes; the rest are operator utilities.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// Scheduled Todoist burn-up report delivered to Telegram
#[derive(Parser, Debug)]
#[command(name = "taskpulse")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the taskpulse CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build and deliver the report once (invoked by the scheduler)
    Run(RunArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `taskpulse config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Subcommands for `taskpulse check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration and required secrets.
    Config(ConfigPathArg),
    /// Test Telegram message delivery.
    Telegram(ConfigPathArg),
}

/// Shared argument struct for commands that take a configuration path.
///
/// When omitted, `~/.taskpulse/config.toml` is used if it exists and
/// built-in defaults otherwise.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for `taskpulse config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file [default: ~/.taskpulse/config.toml]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Cron expression of the schedule that fired (for the log line).
    #[arg(long)]
    pub cron: Option<String>,

    /// Nominal fire time reported by the scheduler (RFC 3339).
    #[arg(long)]
    pub scheduled_at: Option<DateTime<Utc>>,

    /// Build the report and print the chart URL without sending it.
    #[arg(long)]
    pub dry_run: bool,

    /// Override the configured log level.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json_logs: bool,
}
