//! Undo tool implementation.

use rmcp::{model::*, ErrorData as McpError};

use crate::mcp::types::UndoArgs;
use crate::tracker::SharedTracker;

use super::common::{bullet_list, tool_error, tool_text};

/// Revert the most recent checkpoint
pub async fn undo(tracker: &SharedTracker, _args: UndoArgs) -> Result<CallToolResult, McpError> {
    let result = tracker.lock().await.undo().await;

    if !result.success {
        return Ok(tool_error(
            result.message.unwrap_or_else(|| "Failed to undo".to_string()),
        ));
    }

    Ok(tool_text(format!(
        "✅ Undone: \"{}\"\nRestored files:\n{}",
        result.description.unwrap_or_default(),
        bullet_list(result.restored_files.unwrap_or_default())
    )))
}
