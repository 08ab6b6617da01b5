//! Errors raised while capturing a checkpoint.

use thiserror::Error;

/// Capture failed; no checkpoint was pushed.
#[derive(Error, Debug)]
pub enum CheckpointError {
    #[error("Files array is required")]
    NoFiles,
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CheckpointError>;
