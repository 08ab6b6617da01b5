//! Snapshot store: captures file state into a checkpoint and applies it back.
//!
//! Paths are kept exactly as the caller supplied them; relative paths are
//! resolved against the workspace root only when touching the disk.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use super::checkpoint::Checkpoint;
use super::error::{CheckpointError, Result};

/// What restoring a single path did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreAction {
    /// Existing file overwritten with captured content
    Restored,
    /// File was deleted after the checkpoint and has been recreated
    Recreated,
    /// File did not exist at checkpoint time and has been deleted
    Removed,
}

/// A path touched by a restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredFile {
    pub path: String,
    pub action: RestoreAction,
}

impl fmt::Display for RestoredFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            RestoreAction::Restored => write!(f, "{}", self.path),
            RestoreAction::Recreated => write!(f, "{} (restored from deletion)", self.path),
            RestoreAction::Removed => write!(f, "{} (deleted, was created)", self.path),
        }
    }
}

/// Outcome of applying a checkpoint to disk
#[derive(Debug, Default)]
pub struct RestoreReport {
    pub restored: Vec<RestoredFile>,
    pub errors: Vec<String>,
}

impl RestoreReport {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Reads and writes checkpointed files relative to a workspace root.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
    /// Restoring this path panics instead of touching the disk
    #[cfg(test)]
    panic_on_restore: Option<String>,
}

impl SnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            #[cfg(test)]
            panic_on_restore: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn panic_on_restore(&mut self, path: impl Into<String>) {
        self.panic_on_restore = Some(path.into());
    }

    /// Resolve a checkpoint key to a filesystem path.
    ///
    /// Absolute paths replace the root when joined, so they pass through unchanged.
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    /// Capture the current state of `paths`.
    ///
    /// Fails as a whole if any existing file cannot be read as UTF-8 text.
    pub async fn capture(&self, paths: &[String], description: &str) -> Result<Checkpoint> {
        let mut modified_files = BTreeMap::new();
        let mut created_files = BTreeSet::new();

        for path in paths {
            if modified_files.contains_key(path) || created_files.contains(path) {
                continue;
            }

            let target = self.resolve(path);
            let read_error = |source: io::Error| CheckpointError::Read {
                path: path.clone(),
                source,
            };

            if fs::try_exists(&target).await.map_err(read_error)? {
                let content = fs::read_to_string(&target).await.map_err(read_error)?;
                debug!("Captured {}: {} bytes", path, content.len());
                modified_files.insert(path.clone(), content);
            } else {
                debug!("Captured {}: does not exist yet", path);
                created_files.insert(path.clone());
            }
        }

        Ok(Checkpoint::new(modified_files, created_files, description))
    }

    /// Whether restoring `checkpoint` would change nothing on disk right now.
    ///
    /// Any I/O failure while checking counts as a mismatch.
    pub async fn matches_disk(&self, checkpoint: &Checkpoint) -> bool {
        for (path, captured) in &checkpoint.modified_files {
            match fs::read_to_string(self.resolve(path)).await {
                Ok(current) if &current == captured => {}
                _ => return false,
            }
        }

        for path in &checkpoint.created_files {
            match fs::try_exists(self.resolve(path)).await {
                Ok(false) => {}
                _ => return false,
            }
        }

        true
    }

    /// Apply `checkpoint` to disk.
    ///
    /// Every path is attempted independently; failures are collected in the
    /// report instead of stopping the remaining restores.
    pub async fn restore(&self, checkpoint: &Checkpoint) -> RestoreReport {
        let mut report = RestoreReport::default();

        for (path, content) in &checkpoint.modified_files {
            match self.restore_modified(path, content).await {
                Ok(action) => {
                    debug!("Restored {} ({:?})", path, action);
                    report.restored.push(RestoredFile {
                        path: path.clone(),
                        action,
                    });
                }
                Err(e) => report
                    .errors
                    .push(format!("Failed to restore {}: {}", path, e)),
            }
        }

        for path in &checkpoint.created_files {
            match self.remove_created(path).await {
                Ok(true) => {
                    debug!("Removed created file {}", path);
                    report.restored.push(RestoredFile {
                        path: path.clone(),
                        action: RestoreAction::Removed,
                    });
                }
                Ok(false) => debug!("Created file {} already absent", path),
                Err(e) => report
                    .errors
                    .push(format!("Failed to remove {}: {}", path, e)),
            }
        }

        report
    }

    async fn restore_modified(&self, path: &str, content: &str) -> io::Result<RestoreAction> {
        #[cfg(test)]
        if self.panic_on_restore.as_deref() == Some(path) {
            panic!("restore of {} aborted", path);
        }

        let target = self.resolve(path);

        if fs::try_exists(&target).await? {
            fs::write(&target, content).await?;
            return Ok(RestoreAction::Restored);
        }

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        fs::write(&target, content).await?;
        Ok(RestoreAction::Recreated)
    }

    /// Returns whether a file was actually deleted.
    async fn remove_created(&self, path: &str) -> io::Result<bool> {
        let target = self.resolve(path);
        if !fs::try_exists(&target).await? {
            return Ok(false);
        }
        fs::remove_file(&target).await?;
        Ok(true)
    }
}
