use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Local};
use fstalk::errors::{FstalkError, Result};
use fstalk::source::{NotificationSource, RawRecord, WatchHandle};

/// A fake notification source that:
/// - replays a fixed list of records, in order
/// - reports end-of-stream once the script runs out
/// - logs when each record was handed out
#[derive(Debug, Default)]
pub struct ScriptedSource {
    records: VecDeque<RawRecord>,
    read_log: Vec<DateTime<Local>>,
    delays: Vec<(usize, Duration)>,
    fail_with: Option<io::ErrorKind>,
    watches: usize,
}

impl ScriptedSource {
    pub fn new(records: impl IntoIterator<Item = RawRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
            ..Self::default()
        }
    }

    /// After the script is exhausted, fail reads with this error kind
    /// instead of reporting end-of-stream.
    pub fn then_fail(mut self, kind: io::ErrorKind) -> Self {
        self.fail_with = Some(kind);
        self
    }

    /// Sleep for `delay` before handing out the record at `index` (0-based).
    pub fn delay_before(mut self, index: usize, delay: Duration) -> Self {
        self.delays.push((index, delay));
        self
    }

    /// Number of records handed out so far.
    pub fn reads(&self) -> usize {
        self.read_log.len()
    }

    /// When each record was handed out, in read order.
    pub fn read_log(&self) -> &[DateTime<Local>] {
        &self.read_log
    }

    /// Records not yet read.
    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

impl NotificationSource for ScriptedSource {
    fn register_watch(&mut self, path: &Path) -> Result<WatchHandle> {
        let id = self.watches;
        self.watches += 1;
        Ok(WatchHandle::new(id, path))
    }

    fn next_record(&mut self) -> Result<RawRecord> {
        let index = self.read_log.len();
        match self.records.pop_front() {
            Some(record) => {
                if let Some((_, delay)) = self.delays.iter().find(|(i, _)| *i == index) {
                    std::thread::sleep(*delay);
                }
                self.read_log.push(Local::now());
                Ok(record)
            }
            None => match self.fail_with {
                Some(kind) => Err(FstalkError::Read(io::Error::from(kind))),
                None => Err(FstalkError::EndOfStream),
            },
        }
    }
}
