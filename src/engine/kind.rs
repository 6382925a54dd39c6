// src/engine/kind.rs

use std::fmt;
use std::str::FromStr;

use crate::source::mask::{
    IN_ACCESS, IN_CLOSE, IN_CREATE, IN_DELETE, IN_DELETE_SELF, IN_MOVE, IN_MOVE_SELF, IN_OPEN,
};

/// Semantic kind of a filesystem event.
///
/// Every raw mask maps to exactly one kind; anything not recognised
/// (attribute changes, plain modifications, queue overflow, ...) is `Modify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    Open,
    Modify,
    Close,
    Access,
    Create,
    Delete,
    Move,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::Open,
        EventKind::Modify,
        EventKind::Close,
        EventKind::Access,
        EventKind::Create,
        EventKind::Delete,
        EventKind::Move,
    ];

    /// Classify a raw mask.
    ///
    /// Bits are checked in a fixed order so a mask carrying several
    /// conditions still yields a single kind. Modifier bits such as
    /// `IN_ISDIR` never influence the result.
    pub fn from_mask(mask: u32) -> Self {
        if mask & IN_ACCESS != 0 {
            EventKind::Access
        } else if mask & IN_CLOSE != 0 {
            EventKind::Close
        } else if mask & IN_OPEN != 0 {
            EventKind::Open
        } else if is_move_mask(mask) {
            EventKind::Move
        } else if mask & IN_CREATE != 0 {
            EventKind::Create
        } else if mask & (IN_DELETE | IN_DELETE_SELF) != 0 {
            EventKind::Delete
        } else {
            EventKind::Modify
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Open => "open",
            EventKind::Modify => "modify",
            EventKind::Close => "close",
            EventKind::Access => "access",
            EventKind::Create => "create",
            EventKind::Delete => "delete",
            EventKind::Move => "move",
        }
    }
}

/// True if the mask describes one half of a move, or a move of the watched
/// path itself.
pub fn is_move_mask(mask: u32) -> bool {
    mask & (IN_MOVE | IN_MOVE_SELF) != 0
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| format!("invalid event kind: {s}"))
    }
}
