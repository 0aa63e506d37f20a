//! # mcp-demo-server
//!
//! Minimal MCP (Model Context Protocol) demo server over stdio.
//! Exposes a small fixed catalog of tools and resources to show the
//! shape of a protocol handler registry.

pub mod error;
pub mod introspect;
pub mod protocol;
pub mod resources;
mod server;
pub mod tools;
pub mod transport;

pub use error::{Result, ServerError};
pub use introspect::{ProcessProbe, SystemProbe};
pub use protocol::{McpError, McpMessage, ServerCapabilities};
pub use server::McpServer;
pub use tools::ToolExecutor;
pub use transport::StdioTransport;

/// Server name advertised during initialization and embedded in resources.
pub const SERVER_NAME: &str = "simple-demo-server";

/// Server version advertised during initialization.
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
