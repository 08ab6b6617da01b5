//! MCP (Model Context Protocol) server implementation using rmcp.
//!
//! Exposes the checkpoint/undo tracker as five tools over stdio.

mod handlers;
mod server;
mod tools;
pub mod types;

pub use handlers::run_mcp_server;
