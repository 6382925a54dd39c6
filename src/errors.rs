// src/errors.rs

//! Crate-wide error type and helpers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FstalkError {
    #[error("unable to register watch: {source} ({path:?})")]
    Registration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to query event: {0}")]
    Read(#[source] io::Error),

    #[error("unable to write event: {0}")]
    Output(#[source] io::Error),

    #[error("notification channel closed")]
    EndOfStream,

    /// The matching half of a move never showed up inside the lookahead
    /// window. The first half is dropped; skipped records stay queued.
    #[error(
        "no counterpart for move of {target:?} (cookie {cookie}) within {window} records"
    )]
    MoveTimeout {
        cookie: u32,
        target: String,
        window: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FstalkError {
    /// Only a dropped move lets the watch loop carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FstalkError::MoveTimeout { .. })
    }

    /// Underlying OS error, if this error came from a syscall.
    pub fn os_error(&self) -> Option<&io::Error> {
        match self {
            FstalkError::Registration { source, .. } => Some(source),
            FstalkError::Read(source) | FstalkError::Output(source) => Some(source),
            _ => None,
        }
    }

    /// Process exit status: the errno of the failing call, else 1.
    pub fn exit_code(&self) -> i32 {
        self.os_error()
            .and_then(io::Error::raw_os_error)
            .filter(|code| *code != 0)
            .unwrap_or(1)
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, FstalkError>;
