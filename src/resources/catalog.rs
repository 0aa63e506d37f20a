//! Static resource catalog

use crate::protocol::McpResource;

/// URI of the system information resource
pub const SYSTEM_INFO_URI: &str = "demo://system-info";

/// URI of the server statistics resource
pub const SERVER_STATS_URI: &str = "demo://server-stats";

/// List the fixed resource descriptors, in stable order.
pub fn catalog() -> Vec<McpResource> {
    vec![
        McpResource {
            uri: SYSTEM_INFO_URI.to_string(),
            name: "System Information".to_string(),
            description: Some("Basic system information".to_string()),
            mime_type: "application/json".to_string(),
        },
        McpResource {
            uri: SERVER_STATS_URI.to_string(),
            name: "Server Statistics".to_string(),
            description: Some("Current server statistics".to_string()),
            mime_type: "text/plain".to_string(),
        },
    ]
}
