// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dagsched`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dagsched",
    version,
    about = "Generate a random task dependency DAG and compute an execution order.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// When omitted, `Dagsched.toml` is used if it exists, otherwise the
    /// built-in defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of tasks (N). Together with `--deps`, runs a single round
    /// without prompting.
    #[arg(long, value_name = "N", requires = "deps", allow_negative_numbers = true)]
    pub tasks: Option<i64>,

    /// Number of dependencies (M).
    #[arg(long, value_name = "M", requires = "tasks", allow_negative_numbers = true)]
    pub deps: Option<i64>,

    /// Seed for the random graph generator.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Give up after this many cyclic candidate graphs.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_attempts: Option<u64>,

    /// File that run records are appended to.
    #[arg(long, value_name = "PATH")]
    pub results_file: Option<PathBuf>,

    /// Do not append anything to the results file.
    #[arg(long)]
    pub no_save: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGSCHED_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
