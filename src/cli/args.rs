use clap::Parser;

/// Undo MCP - checkpoint and undo for agent file edits, served over stdio
#[derive(Parser)]
#[command(name = "undo-mcp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log filter directive (e.g. "undo_mcp=trace"); overrides --verbose
    #[arg(long, env = "UNDO_MCP_LOG")]
    pub log_filter: Option<String>,

    /// Root for relative checkpoint paths (auto-detects git root if absent)
    #[arg(short = 'w', long, env = "UNDO_MCP_WORKSPACE_ROOT")]
    pub workspace_root: Option<String>,
}

impl Cli {
    /// Log filter directive to install, from the most specific source
    pub fn log_directive(&self) -> &str {
        match &self.log_filter {
            Some(filter) => filter.as_str(),
            None if self.verbose => "debug",
            None => "info",
        }
    }
}
