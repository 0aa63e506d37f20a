//! Error types for the demo server

use thiserror::Error;

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Server error types
///
/// Unknown-tool and unknown-resource conditions are explicit variants so
/// the protocol handler can always turn them into JSON-RPC error responses.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Unknown tool: {0}")]
    ToolNotFound(String),

    #[error("Unknown resource: {0}")]
    ResourceNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
