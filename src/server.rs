//! Main server orchestration

use std::sync::Arc;
use tracing::info;

use crate::error::Result;
use crate::introspect::ProcessProbe;
use crate::transport::StdioTransport;

/// MCP demo server
pub struct McpServer {
    probe: Arc<dyn ProcessProbe>,
}

impl McpServer {
    /// Create a new server with the given process probe
    pub fn new(probe: Arc<dyn ProcessProbe>) -> Self {
        Self { probe }
    }

    /// Run until stdin closes or an interrupt arrives.
    pub async fn run(&self) -> Result<()> {
        let mut transport = StdioTransport::new(self.probe.clone());

        tokio::select! {
            result = transport.run() => result,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received, shutting down");
                Ok(())
            }
        }
    }
}
