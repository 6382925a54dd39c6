// src/config/mod.rs

//! Runtime configuration.
//!
//! fstalk has no configuration file: everything comes from the command line
//! (and `FSTALK_LOG` for the log level). Arguments are collected into a
//! [`RawWatchConfig`] and checked once, producing a [`WatchConfig`] the rest
//! of the program can trust.

pub mod validate;

use std::path::PathBuf;

use crate::cli::CliArgs;
use crate::engine::DEFAULT_MOVE_WINDOW;
use crate::errors::Result;

/// Settings as given, before validation.
#[derive(Debug, Clone)]
pub struct RawWatchConfig {
    pub path: PathBuf,
    pub full_paths: bool,
    pub move_window: usize,
}

impl RawWatchConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            full_paths: false,
            move_window: DEFAULT_MOVE_WINDOW,
        }
    }
}

/// Validated settings for one watch session.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Path to watch (file or directory, not recursive).
    pub path: PathBuf,
    /// Print names joined onto `path` instead of bare entry names.
    pub full_paths: bool,
    /// Records a move may read ahead while looking for its counterpart.
    pub move_window: usize,
}

impl WatchConfig {
    /// Build the watch config from parsed arguments.
    ///
    /// Returns `Ok(None)` when no path was given; the caller shows usage.
    pub fn from_args(args: &CliArgs) -> Result<Option<Self>> {
        let Some(path) = args.path.clone() else {
            return Ok(None);
        };

        let raw = RawWatchConfig {
            path,
            full_paths: args.full_paths,
            move_window: args.move_window,
        };
        Ok(Some(WatchConfig::try_from(raw)?))
    }
}
