//! Checkpoint data model.
//!
//! A checkpoint records the state of a set of files immediately before one
//! planned mutation. Files that existed are captured with their full content;
//! files that did not exist are only remembered by path, since undoing their
//! creation means deleting them.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// Description used when the caller supplies none.
pub const DEFAULT_DESCRIPTION: &str = "Manual checkpoint";

/// Immutable record of file state before one agent-initiated mutation.
///
/// A path appears in at most one of `modified_files` / `created_files`.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    /// Path -> content captured at checkpoint time
    pub modified_files: BTreeMap<String, String>,
    /// Paths that did not exist at checkpoint time
    pub created_files: BTreeSet<String>,
    /// Creation instant, only used for age display
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

impl Checkpoint {
    pub fn new(
        modified_files: BTreeMap<String, String>,
        created_files: BTreeSet<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            modified_files,
            created_files,
            timestamp: Utc::now(),
            description: description.into(),
        }
    }

    /// Number of paths covered by this checkpoint.
    pub fn file_count(&self) -> usize {
        self.modified_files.len() + self.created_files.len()
    }

    /// Every path in the checkpoint, modified files first.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.modified_files
            .keys()
            .chain(self.created_files.iter())
            .map(String::as_str)
    }

    /// Whether two checkpoints would have the same effect when restored.
    ///
    /// Same modified path/content pairs and the same set of created paths.
    /// Timestamp and description are not part of the identity.
    pub fn has_identical_content(&self, other: &Checkpoint) -> bool {
        self.modified_files.len() == other.modified_files.len()
            && self.created_files.len() == other.created_files.len()
            && self.modified_files == other.modified_files
            && self.created_files == other.created_files
    }

    /// Render the block shown by `list_undos` for this checkpoint.
    pub fn format_entry(&self, index: usize, now: DateTime<Utc>) -> String {
        let mut entry = format!(
            "[{}] {}\n    Created: {} | Files: {} ({} modified, {} created)",
            index,
            self.description,
            format_time_ago(self.timestamp, now),
            self.file_count(),
            self.modified_files.len(),
            self.created_files.len()
        );
        for path in self.modified_files.keys() {
            entry.push_str(&format!("\n    ~ {}", path));
        }
        for path in &self.created_files {
            entry.push_str(&format!("\n    + {}", path));
        }
        entry
    }
}

/// Human-readable age: `42s ago`, `5m ago`, `3h ago`, `2d ago`.
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    if seconds < 60 {
        return format!("{}s ago", seconds);
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", hours / 24)
}
