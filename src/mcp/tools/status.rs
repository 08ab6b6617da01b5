//! Status tool implementation.

use rmcp::{model::*, ErrorData as McpError};

use crate::mcp::types::StatusArgs;
use crate::tracker::SharedTracker;

use super::common::tool_text;

/// Report how many distinct checkpoints can be undone
pub async fn status(
    tracker: &SharedTracker,
    _args: StatusArgs,
) -> Result<CallToolResult, McpError> {
    let status = tracker.lock().await.get_status().await;
    Ok(tool_text(format!(
        "📊 Undo System Status:\nCheckpoints: {}\nCan Undo: {}",
        status.checkpoint_count, status.can_undo
    )))
}
