//! MCP request handler

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::capabilities::ServerCapabilities;
use super::types::*;
use crate::error::ServerError;
use crate::introspect::ProcessProbe;
use crate::resources::{self, ResourceReader};
use crate::tools::{self, ToolExecutor};

/// Handler for MCP requests
pub struct RequestHandler {
    /// Tool executor
    tool_executor: ToolExecutor,
    /// Resource reader
    resource_reader: ResourceReader,
    /// Server name
    server_name: String,
    /// Server version
    server_version: String,
    /// Whether the session is initialized
    initialized: bool,
}

impl RequestHandler {
    /// Create a new request handler
    pub fn new(probe: Arc<dyn ProcessProbe>) -> Self {
        Self {
            tool_executor: ToolExecutor::new(probe.clone()),
            resource_reader: ResourceReader::new(probe),
            server_name: crate::SERVER_NAME.to_string(),
            server_version: crate::SERVER_VERSION.to_string(),
            initialized: false,
        }
    }

    /// Handle an incoming message
    pub async fn handle(&mut self, message: McpMessage) -> Option<McpMessage> {
        if message.is_request() {
            let method = message.method.as_ref()?;
            let id = message.id.clone()?;

            debug!("Handling request: {}", method);

            let result = match method.as_str() {
                "initialize" => self.handle_initialize(message.params),
                "ping" => self.handle_ping(),
                "tools/list" => self.handle_tools_list(),
                "tools/call" => self.handle_tools_call(message.params),
                "resources/list" => self.handle_resources_list(),
                "resources/read" => self.handle_resources_read(message.params),
                _ => Err(McpError::method_not_found()),
            };

            Some(match result {
                Ok(result) => McpMessage::response(id, result),
                Err(error) => McpMessage::error_response(Some(id), error),
            })
        } else if message.is_notification() {
            let method = message.method.as_ref()?;
            debug!("Received notification: {}", method);

            match method.as_str() {
                "notifications/initialized" | "initialized" => {
                    info!("Client initialized");
                }
                "notifications/cancelled" => {
                    debug!("Request cancelled");
                }
                _ => {
                    debug!("Unknown notification: {}", method);
                }
            }

            None
        } else {
            // Response - we don't expect these in server mode
            debug!("Received unexpected response");
            None
        }
    }

    /// Handle initialize request
    fn handle_initialize(&mut self, params: Option<Value>) -> Result<Value, McpError> {
        let params: InitializeParams = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string()))?
            .ok_or_else(|| McpError::invalid_params("Missing params"))?;

        info!(
            "Initializing session with client: {} v{}",
            params.client_info.name, params.client_info.version
        );

        self.initialized = true;

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities::with_tools_and_resources(),
            server_info: ServerInfo {
                name: self.server_name.clone(),
                version: self.server_version.clone(),
            },
        };

        serde_json::to_value(result).map_err(|e| McpError::internal_error(e.to_string()))
    }

    /// Handle ping request
    fn handle_ping(&self) -> Result<Value, McpError> {
        Ok(serde_json::json!({}))
    }

    /// Handle tools/list request
    fn handle_tools_list(&self) -> Result<Value, McpError> {
        let result = ToolsListResult {
            tools: tools::catalog(),
        };
        serde_json::to_value(result).map_err(|e| McpError::internal_error(e.to_string()))
    }

    /// Handle tools/call request
    fn handle_tools_call(&self, params: Option<Value>) -> Result<Value, McpError> {
        let params: ToolCallParams = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string()))?
            .ok_or_else(|| McpError::invalid_params("Missing params"))?;

        debug!("Calling tool: {}", params.name);

        match self.tool_executor.execute(&params.name, params.arguments) {
            Ok(tool_result) => serde_json::to_value(tool_result)
                .map_err(|e| McpError::internal_error(e.to_string())),
            Err(e @ ServerError::ToolNotFound(_)) => {
                error!("Tool call rejected: {}", e);
                Err(McpError::invalid_params(e.to_string()))
            }
            Err(e) => {
                error!("Tool execution failed: {}", e);
                Err(McpError::internal_error(e.to_string()))
            }
        }
    }

    /// Handle resources/list request
    fn handle_resources_list(&self) -> Result<Value, McpError> {
        let result = ResourcesListResult {
            resources: resources::catalog(),
        };
        serde_json::to_value(result).map_err(|e| McpError::internal_error(e.to_string()))
    }

    /// Handle resources/read request
    fn handle_resources_read(&self, params: Option<Value>) -> Result<Value, McpError> {
        let params: ResourceReadParams = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string()))?
            .ok_or_else(|| McpError::invalid_params("Missing params"))?;

        debug!("Reading resource: {}", params.uri);

        match self.resource_reader.read(&params.uri) {
            Ok(content) => {
                let result = ResourceReadResult {
                    contents: vec![content],
                };
                serde_json::to_value(result).map_err(|e| McpError::internal_error(e.to_string()))
            }
            Err(e @ ServerError::ResourceNotFound(_)) => {
                error!("Resource read rejected: {}", e);
                Err(McpError::invalid_params(e.to_string()))
            }
            Err(e) => {
                error!("Resource read failed: {}", e);
                Err(McpError::internal_error(e.to_string()))
            }
        }
    }
}
