use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod mcp;
mod tracker;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout carries the MCP protocol, so log to stderr
    let filter = EnvFilter::try_new(cli.log_directive()).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {:?}: {}", cli.log_directive(), e);
        EnvFilter::new("info")
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let workspace_root = cli::resolve_workspace_root(cli.workspace_root)?;

    mcp::run_mcp_server(workspace_root).await
}
