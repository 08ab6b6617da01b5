//! Checkpoint tool implementation.

use rmcp::{model::*, ErrorData as McpError};
use tracing::warn;

use crate::mcp::types::CheckpointArgs;
use crate::tracker::{SharedTracker, DEFAULT_DESCRIPTION};

use super::common::{bullet_list, tool_error, tool_text};

/// Capture the listed files before they are modified
pub async fn checkpoint(
    tracker: &SharedTracker,
    args: CheckpointArgs,
) -> Result<CallToolResult, McpError> {
    // Empty description falls back to the default, same as a missing one
    let description = args
        .description
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    let mut tracker = tracker.lock().await;
    if let Err(e) = tracker.create_checkpoint(&args.files, &description).await {
        warn!("Checkpoint \"{}\" rejected: {}", description, e);
        return Ok(tool_error(format!("Error: {}", e)));
    }

    Ok(tool_text(format!(
        "✅ Checkpoint created: \"{}\"\nFiles captured: {}\n{}",
        description,
        args.files.len(),
        bullet_list(&args.files)
    )))
}
