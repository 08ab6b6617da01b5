//! Checkpoint/undo tracking for agent file edits.
//!
//! Before each mutating action the agent records a checkpoint of the files it
//! is about to touch; `undo` reverts the most recent one. Files that did not
//! exist at checkpoint time are deleted on undo, files deleted since the
//! checkpoint are recreated.

mod checkpoint;
mod error;
mod snapshot;
mod stack;

// Re-exports
pub use checkpoint::DEFAULT_DESCRIPTION;
pub use stack::ChangeTracker;

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Tracker shared by all tool handlers of one server session.
///
/// Each tool call holds the lock for its whole duration, so stack operations
/// never interleave.
pub type SharedTracker = Arc<Mutex<ChangeTracker>>;

/// Create a shared tracker rooted at `root`
pub fn create_shared_tracker(root: PathBuf) -> SharedTracker {
    Arc::new(Mutex::new(ChangeTracker::new(root)))
}
