//! MCP server handlers.
//!
//! This module contains only the MCP server startup logic.

use anyhow::Result;
use rmcp::{transport::stdio, ServiceExt};
use std::path::PathBuf;
use tracing::{error, info};

use super::server::UndoMcpServer;

/// Run the MCP server over stdio.
///
/// # Arguments
/// * `workspace_root` - Directory relative checkpoint paths are resolved against
pub async fn run_mcp_server(workspace_root: PathBuf) -> Result<()> {
    info!("🔧 Starting Undo MCP Server...");
    info!("📂 Workspace root: {}", workspace_root.display());

    let server = UndoMcpServer::new(workspace_root);

    // Start the service
    let service = server.serve(stdio()).await.map_err(|e| {
        error!("Failed to start MCP service: {:?}", e);
        anyhow::anyhow!("Failed to start MCP service: {:?}", e)
    })?;
    info!("✅ Undo MCP Server running on stdio");

    // Wait for service to complete
    service.waiting().await.map_err(|e| {
        error!("MCP service error: {:?}", e);
        anyhow::anyhow!("MCP service error: {:?}", e)
    })?;

    info!("MCP server shutting down; checkpoints discarded");
    Ok(())
}
