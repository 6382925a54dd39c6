// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

use crate::engine::DEFAULT_MOVE_WINDOW;

/// Command-line arguments for `fstalk`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fstalk",
    version,
    about = "Print a line for every filesystem event on a path.",
    long_about = None
)]
pub struct CliArgs {
    /// File or directory to watch.
    ///
    /// If omitted, usage is printed and fstalk exits successfully.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Show names joined onto the watched path instead of bare entry names.
    #[arg(long)]
    pub full_paths: bool,

    /// How many further events a move may scan for its other half before
    /// it is dropped.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MOVE_WINDOW)]
    pub move_window: usize,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FSTALK_LOG` or a default level will be used.
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

/// Usage text shown when no path is given.
pub fn usage() -> String {
    CliArgs::command().render_help().to_string()
}
