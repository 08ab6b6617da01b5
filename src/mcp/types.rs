//! MCP tool parameter types.
//!
//! These types are used with rmcp's `Parameters<T>` wrapper for automatic
//! deserialization and JSON schema generation.

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for the checkpoint tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CheckpointArgs {
    /// Array of file paths that will be modified, created, or deleted
    pub files: Vec<String>,
    /// Concise, action-focused description of the next specific change to be made
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parameters for the undo tool (no arguments needed)
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UndoArgs {}

/// Parameters for the list_undos tool (no arguments needed)
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListUndosArgs {}

/// Parameters for the status tool (no arguments needed)
#[derive(Debug, Deserialize, JsonSchema)]
pub struct StatusArgs {}

/// Parameters for the cleanup tool (no arguments needed)
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CleanupArgs {}
