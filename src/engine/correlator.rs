// src/engine/correlator.rs

//! Turns raw notification records into [`Event`]s.
//!
//! Most records map one-to-one onto an event. A move, however, is reported
//! by the kernel as two records (moved-from and moved-to) that share a
//! cookie and may have unrelated records in between. When the correlator
//! sees one half it reads ahead, up to a fixed window, looking for the
//! other; everything it skips over goes to the [`PendingQueue`] and is
//! delivered by later calls in the order it was read.
//!
//! Ordering guarantee: records in the pending queue keep their relative
//! order. They are not globally ordered against records still unread in the
//! source.

use chrono::Local;
use tracing::{debug, warn};

use crate::engine::kind::{is_move_mask, EventKind};
use crate::engine::queue::PendingQueue;
use crate::engine::Event;
use crate::errors::{FstalkError, Result};
use crate::source::mask::IN_Q_OVERFLOW;
use crate::source::{NotificationSource, RawRecord};

/// How many extra records a move may read while looking for its counterpart.
pub const DEFAULT_MOVE_WINDOW: usize = 50;

#[derive(Debug)]
pub struct Correlator {
    pending: PendingQueue,
    window: usize,
}

impl Default for Correlator {
    fn default() -> Self {
        Self::new()
    }
}

impl Correlator {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_MOVE_WINDOW)
    }

    /// `window` is clamped to at least 1.
    pub fn with_window(window: usize) -> Self {
        Self {
            pending: PendingQueue::new(),
            window: window.max(1),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Records skipped by earlier lookaheads, not yet delivered.
    pub fn pending(&self) -> &PendingQueue {
        &self.pending
    }

    /// Block until the next event can be finalized.
    ///
    /// Queued records are served before the source is consulted. Returns
    /// [`FstalkError::MoveTimeout`] when a move's counterpart does not turn up
    /// within the window; that error is recoverable and the next call carries
    /// on with whatever the failed lookahead queued.
    pub fn next_event<S>(&mut self, source: &mut S) -> Result<Event>
    where
        S: NotificationSource + ?Sized,
    {
        let record = match self.pending.pop_front() {
            Some(record) => {
                debug!(
                    name = %record.name,
                    remaining = self.pending.len(),
                    "delivering queued record"
                );
                record
            }
            None => source.next_record()?,
        };

        self.finalize(record, source)
    }

    fn finalize<S>(&mut self, record: RawRecord, source: &mut S) -> Result<Event>
    where
        S: NotificationSource + ?Sized,
    {
        let kind = EventKind::from_mask(record.mask);
        let timestamp = Local::now();

        if record.mask & IN_Q_OVERFLOW != 0 {
            warn!("kernel notification queue overflowed; events were lost");
        }

        if !is_move_mask(record.mask) {
            return Ok(Event::new(kind, timestamp, record.name));
        }

        // No cookie means no counterpart will ever arrive (e.g. the watched
        // path itself was moved).
        if record.cookie == 0 {
            debug!(name = %record.name, "move without cookie; not looking ahead");
            return Ok(Event::new(EventKind::Move, timestamp, record.name));
        }

        let cookie = record.cookie;

        if let Some(partner) = self.pending.take_matching(cookie) {
            debug!(cookie, from = %record.name, to = %partner.name, "paired move from queue");
            return Ok(Event::moved(timestamp, record.name, partner.name));
        }

        for _ in 0..self.window {
            let candidate = source.next_record()?;
            if candidate.cookie == cookie {
                debug!(cookie, from = %record.name, to = %candidate.name, "paired move");
                return Ok(Event::moved(timestamp, record.name, candidate.name));
            }
            self.pending.push_back(candidate);
        }

        warn!(
            cookie,
            name = %record.name,
            window = self.window,
            queued = self.pending.len(),
            "dropping move with no counterpart"
        );
        Err(FstalkError::MoveTimeout {
            cookie,
            target: record.name,
            window: self.window,
        })
    }
}
