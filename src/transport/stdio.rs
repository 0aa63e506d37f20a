//! stdio transport: newline-delimited JSON-RPC over stdin/stdout

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::error::Result;
use crate::introspect::ProcessProbe;
use crate::protocol::{McpError, McpMessage, RequestHandler};

/// stdio transport for the MCP protocol
pub struct StdioTransport {
    handler: RequestHandler,
}

impl StdioTransport {
    /// Create a new stdio transport
    pub fn new(probe: Arc<dyn ProcessProbe>) -> Self {
        Self {
            handler: RequestHandler::new(probe),
        }
    }

    /// Run the stdio loop until EOF.
    ///
    /// One request at a time; each handler runs to completion before the
    /// next line is read. Diagnostics go to stderr only, stdout carries
    /// nothing but protocol frames.
    pub async fn run(&mut self) -> Result<()> {
        info!("MCP Server running on stdio");

        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut reader = BufReader::new(stdin);
        let mut line = String::new();

        loop {
            line.clear();

            let bytes_read = reader.read_line(&mut line).await?;
            if bytes_read == 0 {
                info!("EOF received, shutting down");
                break;
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            debug!("Received: {}", line);

            let message: McpMessage = match serde_json::from_str(line) {
                Ok(msg) => msg,
                Err(e) => {
                    error!("Failed to parse message: {}", e);
                    let response = McpMessage::error_response(None, McpError::parse_error());
                    Self::write_message(&mut stdout, &response).await?;
                    continue;
                }
            };

            if let Some(response) = self.handler.handle(message).await {
                Self::write_message(&mut stdout, &response).await?;
            }
        }

        Ok(())
    }

    async fn write_message(stdout: &mut tokio::io::Stdout, message: &McpMessage) -> Result<()> {
        let line = serde_json::to_string(message)?;
        debug!("Sending: {}", line);
        stdout.write_all(line.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        Ok(())
    }
}
