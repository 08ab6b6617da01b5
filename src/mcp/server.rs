//! MCP server implementation.
//!
//! This module contains the UndoMcpServer struct and its tool routing.

use rmcp::{
    handler::server::router::tool::ToolRouter, handler::server::wrapper::Parameters, model::*,
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use std::path::PathBuf;

use crate::tracker::{create_shared_tracker, SharedTracker};

use super::tools;
use super::types::*;

/// Undo MCP Server
#[derive(Clone)]
pub struct UndoMcpServer {
    tracker: SharedTracker,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl UndoMcpServer {
    /// Create a new server with an empty undo stack
    ///
    /// # Arguments
    /// * `workspace_root` - Directory relative file paths are resolved against
    pub fn new(workspace_root: PathBuf) -> Self {
        Self {
            tracker: create_shared_tracker(workspace_root),
            tool_router: Self::tool_router(),
        }
    }

    /// Create a checkpoint before modifying files
    #[tool(
        name = "checkpoint",
        description = "MANDATORY: ALWAYS call this function FIRST before making ANY file modifications, deletions, or creations. This creates a checkpoint to enable undo functionality. This must be called before every single file operation - no exceptions. Never modify files without calling checkpoint first."
    )]
    async fn checkpoint(
        &self,
        Parameters(args): Parameters<CheckpointArgs>,
    ) -> Result<CallToolResult, McpError> {
        tools::checkpoint(&self.tracker, args).await
    }

    /// Undo the last checkpoint
    #[tool(
        name = "undo",
        description = "Undo the last checkpoint (pops from stack and restores files). Each call removes the latest checkpoint from the stack. To undo multiple changes, call this function repeatedly until the desired state is reached."
    )]
    async fn undo(&self, Parameters(args): Parameters<UndoArgs>) -> Result<CallToolResult, McpError> {
        tools::undo(&self.tracker, args).await
    }

    /// List all undo checkpoints
    #[tool(
        name = "list_undos",
        description = "List all undo checkpoints in the stack"
    )]
    async fn list_undos(
        &self,
        Parameters(args): Parameters<ListUndosArgs>,
    ) -> Result<CallToolResult, McpError> {
        tools::list_undos(&self.tracker, args).await
    }

    /// Clear all undo checkpoints
    #[tool(
        name = "cleanup",
        description = "Clear all undo checkpoints from the stack"
    )]
    async fn cleanup(
        &self,
        Parameters(args): Parameters<CleanupArgs>,
    ) -> Result<CallToolResult, McpError> {
        tools::cleanup(&self.tracker, args).await
    }

    /// Get undo system status
    #[tool(
        name = "status",
        description = "Get current status of the undo system (checkpoint count, number of checkpoints in the stack, and whether undo is possible)"
    )]
    async fn status(
        &self,
        Parameters(args): Parameters<StatusArgs>,
    ) -> Result<CallToolResult, McpError> {
        tools::status(&self.tracker, args).await
    }
}

#[tool_handler]
impl ServerHandler for UndoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "undo-mcp".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Call checkpoint before every file modification; undo reverts the most recent checkpoint."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_server_info() {
        let temp_dir = TempDir::new().unwrap();
        let server = UndoMcpServer::new(temp_dir.path().to_path_buf());
        let info = server.get_info();
        assert_eq!(info.server_info.name, "undo-mcp");
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_all_tools_routed() {
        let temp_dir = TempDir::new().unwrap();
        let server = UndoMcpServer::new(temp_dir.path().to_path_buf());
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec!["checkpoint", "cleanup", "list_undos", "status", "undo"]
        );
    }

    #[tokio::test]
    async fn test_clones_share_one_stack() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.txt");
        std::fs::write(&file, "1").unwrap();

        let server = UndoMcpServer::new(temp_dir.path().to_path_buf());
        let clone = server.clone();
        server
            .tracker
            .lock()
            .await
            .create_checkpoint(&["a.txt".to_string()], "Edit")
            .await
            .unwrap();
        std::fs::write(&file, "2").unwrap();

        assert_eq!(clone.tracker.lock().await.get_status().await.checkpoint_count, 1);
    }
}
