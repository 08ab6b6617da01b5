use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Find the nearest ancestor of `start` containing a `.git` entry.
pub fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Resolve the directory relative checkpoint paths are anchored to.
pub fn resolve_workspace_root(workspace_root: Option<String>) -> Result<PathBuf> {
    if let Some(path) = workspace_root {
        return PathBuf::from(&path)
            .canonicalize()
            .with_context(|| format!("Failed to canonicalize provided workspace root: {}", path));
    }

    let current = std::env::current_dir().context("Failed to get current directory")?;
    Ok(find_git_root(&current).unwrap_or(current))
}
