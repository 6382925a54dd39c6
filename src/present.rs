// src/present.rs

//! Human-readable rendering of finalized events.

use std::path::PathBuf;

use crate::engine::{Event, EventKind};

/// `DD Mon YYYY - hh:mm:ss`, local time.
pub const TIMESTAMP_FORMAT: &str = "%d %b %Y - %H:%M:%S";

/// Formats events as single stdout lines:
///
/// ```text
/// [19 Oct 2026 - 14:03:11] create notes.txt
/// [19 Oct 2026 - 14:03:12] move notes.txt -> todo.txt
/// ```
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    /// When set, names are shown joined onto the watched path.
    root: Option<PathBuf>,
}

impl Presenter {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn render(&self, event: &Event) -> String {
        let stamp = event.timestamp.format(TIMESTAMP_FORMAT);
        let target = self.display_name(&event.target);

        match (&event.kind, &event.destination) {
            (EventKind::Move, Some(destination)) => format!(
                "[{stamp}] {} {target} -> {}",
                event.kind,
                self.display_name(destination)
            ),
            _ => format!("[{stamp}] {} {target}", event.kind),
        }
    }

    fn display_name(&self, name: &str) -> String {
        match &self.root {
            None => name.to_string(),
            Some(root) if name.is_empty() => root.display().to_string(),
            Some(root) => root.join(name).display().to_string(),
        }
    }
}
