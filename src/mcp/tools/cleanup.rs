//! Cleanup tool implementation.

use rmcp::{model::*, ErrorData as McpError};

use crate::mcp::types::CleanupArgs;
use crate::tracker::SharedTracker;

use super::common::tool_text;

/// Clear every checkpoint
pub async fn cleanup(
    tracker: &SharedTracker,
    _args: CleanupArgs,
) -> Result<CallToolResult, McpError> {
    tracker.lock().await.cleanup();
    Ok(tool_text("✅ All undo checkpoints cleared"))
}
