//! List undos tool implementation.

use rmcp::{model::*, ErrorData as McpError};

use crate::mcp::types::ListUndosArgs;
use crate::tracker::SharedTracker;

use super::common::tool_text;

/// List the surviving checkpoints, oldest first
pub async fn list_undos(
    tracker: &SharedTracker,
    _args: ListUndosArgs,
) -> Result<CallToolResult, McpError> {
    let entries = tracker.lock().await.list_undo_stack().await;
    Ok(tool_text(format!("Undo Stack:\n{}", entries.join("\n\n"))))
}
