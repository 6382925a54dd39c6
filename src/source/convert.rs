// src/source/convert.rs

//! Conversion from inotify events to [`RawRecord`]s.
//!
//! The kernel record layout itself is parsed by the `inotify` crate; this is
//! the one place where its events are turned into the engine's input.

use std::ffi::OsStr;

use super::RawRecord;

/// Build a record from the parts of an inotify event.
///
/// A missing name (event on the watched path itself) becomes an empty
/// string; names that are not valid UTF-8 are converted lossily.
pub fn record_from_parts(mask: u32, cookie: u32, name: Option<&OsStr>) -> RawRecord {
    let name = name
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    RawRecord::new(mask, cookie, name)
}

#[cfg(target_os = "linux")]
impl From<inotify::Event<&OsStr>> for RawRecord {
    fn from(event: inotify::Event<&OsStr>) -> Self {
        record_from_parts(event.mask.bits(), event.cookie, event.name)
    }
}
