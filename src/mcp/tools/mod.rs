//! MCP tool implementations.
//!
//! Each tool is implemented in its own module for better organization.

mod checkpoint;
mod cleanup;
mod common;
mod list_undos;
mod status;
mod undo;

// Re-export tool functions
pub use checkpoint::checkpoint;
pub use cleanup::cleanup;
pub use list_undos::list_undos;
pub use status::status;
pub use undo::undo;

#[cfg(test)]
mod tests;
