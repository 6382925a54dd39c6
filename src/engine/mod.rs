// src/engine/mod.rs

//! Event correlation engine for fstalk.
//!
//! This module ties together:
//! - the event-kind mapper (raw mask -> [`EventKind`])
//! - the pending queue of records skipped during a move lookahead
//! - the correlator that pairs the two halves of a move
//! - the blocking watch loop that feeds finalized events to the presenter
//!
//! The correlator is synchronous and owns no IO of its own: it pulls raw
//! records from whatever [`NotificationSource`](crate::source::NotificationSource)
//! it is handed, which keeps it testable with a scripted source.

use chrono::{DateTime, Local};

pub mod correlator;
pub mod kind;
pub mod queue;
pub mod runtime;

pub use correlator::{Correlator, DEFAULT_MOVE_WINDOW};
pub use kind::EventKind;
pub use queue::PendingQueue;
pub use runtime::watch_loop;

/// A normalized filesystem event, ready to be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// When the event (or the first half of a move) was seen.
    pub timestamp: DateTime<Local>,
    pub target: String,
    /// Only set for [`EventKind::Move`].
    pub destination: Option<String>,
}

impl Event {
    pub fn new(kind: EventKind, timestamp: DateTime<Local>, target: impl Into<String>) -> Self {
        Self {
            kind,
            timestamp,
            target: target.into(),
            destination: None,
        }
    }

    pub fn moved(
        timestamp: DateTime<Local>,
        target: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            kind: EventKind::Move,
            timestamp,
            target: target.into(),
            destination: Some(destination.into()),
        }
    }
}
