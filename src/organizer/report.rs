//! Audit trail of an organize run.
//!
//! Every file-level outcome is recorded as an [`Event`]; moves are also
//! tallied per destination in [`MoveCounts`]. A [`Report`] is the rendered,
//! serializable view of both.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A file-level outcome recorded during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The file has no extension and was left in place.
    Skipped {
        /// File name
        name: String,
    },
    /// The file was moved into `destination`.
    Moved {
        /// File name
        name: String,
        /// Folder the file now lives in
        destination: PathBuf,
    },
}

impl Event {
    /// Destination folder for a move, `None` for skips.
    #[must_use]
    pub fn destination(&self) -> Option<&Path> {
        match self {
            Self::Moved { destination, .. } => Some(destination),
            Self::Skipped { .. } => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped { name } => {
                write!(f, "File {} doesn't have an extension, skipping.", name)
            }
            Self::Moved { name, destination } => {
                write!(f, "Moved {} to {}", name, destination.display())
            }
        }
    }
}

/// Number of files moved into each destination, in first-touched order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveCounts {
    entries: Vec<(PathBuf, usize)>,
}

impl MoveCounts {
    /// Record one move into `folder`.
    pub fn increment(&mut self, folder: &Path) {
        match self.entries.iter_mut().find(|(f, _)| f == folder) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((folder.to_path_buf(), 1)),
        }
    }

    /// Moves recorded for `folder` (zero if none).
    #[must_use]
    pub fn get(&self, folder: &Path) -> usize {
        self.entries
            .iter()
            .find(|(f, _)| f == folder)
            .map_or(0, |(_, count)| *count)
    }

    /// Iterate destinations with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, usize)> {
        self.entries.iter().map(|(f, c)| (f.as_path(), *c))
    }

    /// Total number of moves.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Number of distinct destinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was moved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Summary and detail lines of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// One line per destination that received at least one file.
    pub summary: Vec<String>,
    /// One line per skip or move, in processing order.
    pub details: Vec<String>,
}

impl Report {
    /// Build a report from move counts and recorded events.
    #[must_use]
    pub fn new(counts: &MoveCounts, events: &[Event]) -> Self {
        Self {
            summary: counts
                .iter()
                .map(|(folder, count)| format!("Moved {} file(s) to {}", count, folder.display()))
                .collect(),
            details: events.iter().map(ToString::to_string).collect(),
        }
    }

    /// Whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.details.is_empty()
    }
}
