// src/engine/queue.rs

use std::collections::VecDeque;

use tracing::trace;

use crate::source::RawRecord;

/// Raw records that were read while looking for the other half of a move
/// but belong to something else.
///
/// Semantics:
/// - Records are appended at the tail as the lookahead skips them.
/// - The correlator drains from the head before reading anything new from
///   the notification source, so skipped records are never lost and keep
///   their relative order.
/// - Growth is bounded only by the lookahead window of each correlation
///   attempt (at most `window` records per attempt).
#[derive(Debug, Default)]
pub struct PendingQueue {
    records: VecDeque<RawRecord>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
        }
    }

    pub fn push_back(&mut self, record: RawRecord) {
        trace!(
            mask = record.mask,
            cookie = record.cookie,
            name = %record.name,
            queued = self.records.len() + 1,
            "queued record skipped during move lookahead"
        );
        self.records.push_back(record);
    }

    pub fn pop_front(&mut self) -> Option<RawRecord> {
        self.records.pop_front()
    }

    /// Remove and return the earliest queued record carrying `cookie`,
    /// leaving the others in place and in order.
    pub fn take_matching(&mut self, cookie: u32) -> Option<RawRecord> {
        let idx = self.records.iter().position(|r| r.cookie == cookie)?;
        self.records.remove(idx)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
