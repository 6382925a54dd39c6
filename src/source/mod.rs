// src/source/mod.rs

//! Raw filesystem notifications.
//!
//! This module is responsible for:
//! - The raw record type produced by the OS notification facility.
//! - Converting inotify events into that record type.
//! - The inotify-backed [`NotificationSource`] used in production.
//!
//! It does **not** classify or pair records; that is the engine's job.

pub mod convert;
#[cfg(target_os = "linux")]
pub mod inotify;
pub mod mask;

use std::path::{Path, PathBuf};

use crate::errors::Result;

#[cfg(target_os = "linux")]
pub use inotify::InotifySource;

/// One low-level notification as reported by the kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Bitset of `source::mask` flags.
    pub mask: u32,
    /// Links the two halves of a move; zero otherwise.
    pub cookie: u32,
    /// Name of the entry inside a watched directory. Empty for events on the
    /// watched path itself.
    pub name: String,
}

impl RawRecord {
    pub fn new(mask: u32, cookie: u32, name: impl Into<String>) -> Self {
        Self {
            mask,
            cookie,
            name: name.into(),
        }
    }
}

/// Opaque reference to a registered watch.
///
/// `id` is assigned by the source and is unique among its watches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchHandle {
    id: usize,
    path: PathBuf,
}

impl WatchHandle {
    pub fn new(id: usize, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            path: path.into(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Trait abstracting where raw records come from.
///
/// Production code uses [`InotifySource`]; tests drive the correlator with a
/// scripted implementation that replays a fixed record sequence.
pub trait NotificationSource {
    /// Register interest in `path`, opening the underlying channel on first use.
    fn register_watch(&mut self, path: &Path) -> Result<WatchHandle>;

    /// Block until the next raw record is available.
    fn next_record(&mut self) -> Result<RawRecord>;
}
