// src/source/inotify.rs

use std::collections::VecDeque;
use std::io;
use std::path::Path;

use inotify::{Inotify, WatchDescriptor, WatchMask};
use tracing::{debug, info, trace};

use super::{NotificationSource, RawRecord, WatchHandle};
use crate::errors::{FstalkError, Result};

/// Size of the fixed `inotify_event` header.
const EVENT_HEADER_LEN: usize = 16;
const NAME_MAX: usize = 255;

/// Large enough for at least one record with a maximal name; in practice
/// holds many.
const READ_BUFFER_LEN: usize = 4096;
const _: () = assert!(READ_BUFFER_LEN >= EVENT_HEADER_LEN + NAME_MAX + 1);

/// Blocking inotify-backed notification source.
///
/// The inotify instance is created lazily on the first registration and then
/// reused for every later one. It is closed when the source is dropped.
#[derive(Debug)]
pub struct InotifySource {
    inotify: Option<Inotify>,
    watches: Vec<WatchDescriptor>,
    /// Records from the last read not yet handed out.
    ready: VecDeque<RawRecord>,
    buffer: Vec<u8>,
}

impl Default for InotifySource {
    fn default() -> Self {
        Self::new()
    }
}

impl InotifySource {
    pub fn new() -> Self {
        Self {
            inotify: None,
            watches: Vec::new(),
            ready: VecDeque::new(),
            buffer: vec![0u8; READ_BUFFER_LEN],
        }
    }

    /// Whether the underlying channel has been created yet.
    pub fn is_open(&self) -> bool {
        self.inotify.is_some()
    }

    /// Open the inotify channel if it is not open already.
    pub fn open(&mut self) -> io::Result<&mut Inotify> {
        if self.inotify.is_none() {
            self.inotify = Some(Inotify::init()?);
            debug!("opened inotify channel");
        }

        self.inotify
            .as_mut()
            .ok_or_else(|| io::Error::other("inotify channel unavailable"))
    }

    fn add_watch(&mut self, path: &Path) -> io::Result<usize> {
        let wd = self.open()?.watches().add(path, WatchMask::ALL_EVENTS)?;

        // Re-adding a watched path hands back the same descriptor.
        let id = match self.watches.iter().position(|known| *known == wd) {
            Some(id) => id,
            None => {
                self.watches.push(wd);
                self.watches.len() - 1
            }
        };
        Ok(id)
    }

    /// Block until at least one record is available and queue every record
    /// that read returned.
    fn fill(&mut self) -> Result<()> {
        let Some(inotify) = self.inotify.as_mut() else {
            return Err(FstalkError::Read(io::Error::new(
                io::ErrorKind::NotConnected,
                "no watch registered",
            )));
        };

        let before = self.ready.len();
        loop {
            match inotify.read_events_blocking(&mut self.buffer) {
                Ok(events) => {
                    self.ready.extend(events.map(RawRecord::from));
                    break;
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    return Err(FstalkError::EndOfStream);
                }
                Err(err) => return Err(FstalkError::Read(err)),
            }
        }

        let read = self.ready.len() - before;
        trace!(records = read, "read inotify buffer");

        if read == 0 {
            return Err(FstalkError::EndOfStream);
        }
        Ok(())
    }
}

impl NotificationSource for InotifySource {
    fn register_watch(&mut self, path: &Path) -> Result<WatchHandle> {
        let id = self
            .add_watch(path)
            .map_err(|source| FstalkError::Registration {
                path: path.to_path_buf(),
                source,
            })?;

        info!(?path, id, "registered watch");
        Ok(WatchHandle::new(id, path))
    }

    fn next_record(&mut self) -> Result<RawRecord> {
        loop {
            if let Some(record) = self.ready.pop_front() {
                return Ok(record);
            }
            self.fill()?;
        }
    }
}
