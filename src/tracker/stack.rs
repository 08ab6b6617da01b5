//! Checkpoint stack with lazy deduplication.
//!
//! Checkpoints are pushed without any disk comparison. Before the stack is
//! observed (list, status) or consumed (undo), it is normalized: checkpoints
//! that already match the files on disk, and checkpoints whose effect
//! duplicates an older surviving one, are dropped.

use futures_util::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::checkpoint::Checkpoint;
use super::error::{CheckpointError, Result};
use super::snapshot::{RestoredFile, SnapshotStore};

/// Message returned by `undo` when there is nothing left to revert
pub const NOTHING_TO_UNDO: &str = "No checkpoints to undo";

/// Sentinel entry returned by `list_undo_stack` for an empty stack
pub const NO_CHECKPOINTS_AVAILABLE: &str = "No undo checkpoints available";

/// Structured undo outcome. Failures are reported here rather than raised.
#[derive(Debug, Clone)]
pub struct UndoResult {
    pub success: bool,
    pub message: Option<String>,
    pub restored_files: Option<Vec<RestoredFile>>,
    pub description: Option<String>,
}

impl UndoResult {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            restored_files: None,
            description: None,
        }
    }

    fn restored(description: String, restored_files: Vec<RestoredFile>) -> Self {
        Self {
            success: true,
            message: None,
            restored_files: Some(restored_files),
            description: Some(description),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerStatus {
    pub checkpoint_count: usize,
    pub can_undo: bool,
}

/// Session-scoped undo stack, oldest checkpoint first.
pub struct ChangeTracker {
    store: SnapshotStore,
    undo_stack: Vec<Checkpoint>,
}

impl ChangeTracker {
    /// Create an empty tracker resolving relative paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            store: SnapshotStore::new(root),
            undo_stack: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut SnapshotStore {
        &mut self.store
    }

    /// Capture `files` and push the result onto the stack.
    pub async fn create_checkpoint(&mut self, files: &[String], description: &str) -> Result<()> {
        if files.is_empty() {
            return Err(CheckpointError::NoFiles);
        }

        debug!("Creating checkpoint: {}", description);
        debug!("Files to checkpoint: {}", files.join(", "));

        let checkpoint = self.store.capture(files, description).await?;
        info!(
            "📌 Checkpoint \"{}\" created ({} modified, {} created). Stack size: {}",
            checkpoint.description,
            checkpoint.modified_files.len(),
            checkpoint.created_files.len(),
            self.undo_stack.len() + 1
        );
        self.undo_stack.push(checkpoint);

        Ok(())
    }

    /// Revert the most recent surviving checkpoint.
    ///
    /// The tail stays on the stack until its restore fully succeeds, so a
    /// partial failure or a panic inside the restore leaves it in place.
    pub async fn undo(&mut self) -> UndoResult {
        self.deduplicate().await;

        let Some(checkpoint) = self.undo_stack.last() else {
            return UndoResult::failure(NOTHING_TO_UNDO);
        };

        debug!("Starting undo for checkpoint: {}", checkpoint.description);
        debug!(
            "Files to restore: {}",
            checkpoint.paths().collect::<Vec<_>>().join(", ")
        );

        let outcome = AssertUnwindSafe(self.store.restore(checkpoint))
            .catch_unwind()
            .await;

        match outcome {
            Ok(report) if report.is_complete() => {
                let description = checkpoint.description.clone();
                self.undo_stack.pop();
                info!(
                    "↩️ Undone \"{}\": {} files restored. Stack size: {}",
                    description,
                    report.restored.len(),
                    self.undo_stack.len()
                );
                UndoResult::restored(description, report.restored)
            }
            Ok(report) => {
                warn!(
                    "Undo of \"{}\" incomplete, keeping checkpoint: {}",
                    checkpoint.description,
                    report.errors.join("; ")
                );
                UndoResult::failure(format!(
                    "Some files failed to restore: {}",
                    report.errors.join("; ")
                ))
            }
            Err(panic) => {
                let reason = panic_message(&*panic);
                warn!(
                    "Undo of \"{}\" aborted, keeping checkpoint: {}",
                    checkpoint.description, reason
                );
                UndoResult::failure(format!("Failed to restore checkpoint: {}", reason))
            }
        }
    }

    /// One formatted block per surviving checkpoint, oldest first.
    pub async fn list_undo_stack(&mut self) -> Vec<String> {
        self.deduplicate().await;

        if self.undo_stack.is_empty() {
            return vec![NO_CHECKPOINTS_AVAILABLE.to_string()];
        }

        let now = chrono::Utc::now();
        self.undo_stack
            .iter()
            .enumerate()
            .map(|(index, checkpoint)| checkpoint.format_entry(index + 1, now))
            .collect()
    }

    pub async fn get_status(&mut self) -> TrackerStatus {
        self.deduplicate().await;

        TrackerStatus {
            checkpoint_count: self.undo_stack.len(),
            can_undo: !self.undo_stack.is_empty(),
        }
    }

    /// Drop every checkpoint.
    pub fn cleanup(&mut self) {
        let cleared = self.undo_stack.len();
        self.undo_stack.clear();
        info!("🧹 All checkpoints cleared ({} removed)", cleared);
    }

    /// Remove checkpoints that have no effect relative to the disk or that
    /// duplicate an older surviving checkpoint. Relative order is preserved.
    async fn deduplicate(&mut self) {
        if self.undo_stack.is_empty() {
            return;
        }

        let before = self.undo_stack.len();
        let mut keep: Vec<bool> = Vec::with_capacity(before);

        for (i, checkpoint) in self.undo_stack.iter().enumerate() {
            if self.store.matches_disk(checkpoint).await {
                debug!(
                    "Checkpoint \"{}\" matches current file state, removing",
                    checkpoint.description
                );
                keep.push(false);
                continue;
            }

            let duplicate = self.undo_stack[..i]
                .iter()
                .zip(&keep)
                .any(|(earlier, &kept)| kept && earlier.has_identical_content(checkpoint));
            if duplicate {
                debug!(
                    "Checkpoint \"{}\" duplicates an earlier checkpoint, removing",
                    checkpoint.description
                );
            }
            keep.push(!duplicate);
        }

        let mut flags = keep.into_iter();
        self.undo_stack.retain(|_| flags.next().unwrap_or(true));

        let removed = before - self.undo_stack.len();
        if removed > 0 {
            info!(
                "Deduplicated {} redundant checkpoints. Stack size: {}",
                removed,
                self.undo_stack.len()
            );
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_payloads() {
        let static_str: Box<dyn Any + Send> = Box::new("disk vanished");
        assert_eq!(panic_message(&*static_str), "disk vanished");

        let owned: Box<dyn Any + Send> = Box::new(format!("bad path {}", 7));
        assert_eq!(panic_message(&*owned), "bad path 7");

        let other: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(&*other), "unknown panic");
    }

    #[test]
    fn test_panic_message_from_caught_panic() {
        let payload = std::panic::catch_unwind(|| panic!("restore of {} aborted", "a.txt"))
            .unwrap_err();
        assert_eq!(panic_message(&*payload), "restore of a.txt aborted");
    }
}
