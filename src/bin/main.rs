//! MCP demo server binary
//!
//! Speaks newline-delimited JSON-RPC on stdin/stdout, so all logging is
//! routed to stderr.

use std::sync::Arc;

use tracing::error;

use mcp_demo_server::{McpServer, SystemProbe};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let probe = Arc::new(SystemProbe::new());
    let server = McpServer::new(probe);

    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
