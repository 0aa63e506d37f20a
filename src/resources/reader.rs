//! Resource URI dispatch and content production

use std::sync::Arc;

use chrono::SecondsFormat;
use serde_json::json;
use tracing::debug;

use super::catalog::{SERVER_STATS_URI, SYSTEM_INFO_URI};
use crate::error::ServerError;
use crate::introspect::ProcessProbe;
use crate::protocol::ResourceContent;

/// Reader for the fixed demo resources
pub struct ResourceReader {
    probe: Arc<dyn ProcessProbe>,
}

impl ResourceReader {
    /// Create a new resource reader
    pub fn new(probe: Arc<dyn ProcessProbe>) -> Self {
        Self { probe }
    }

    /// Read a resource by URI.
    ///
    /// An unknown URI is a hard `ResourceNotFound`.
    pub fn read(&self, uri: &str) -> Result<ResourceContent, ServerError> {
        debug!("Reading resource: {}", uri);

        match uri {
            SYSTEM_INFO_URI => Ok(self.system_info()),
            SERVER_STATS_URI => Ok(self.server_stats()),
            other => Err(ServerError::ResourceNotFound(other.to_string())),
        }
    }

    fn system_info(&self) -> ResourceContent {
        let info = json!({
            "platform": self.probe.platform(),
            "runtimeVersion": self.probe.runtime_version(),
            "uptime": self.probe.uptime(),
            "memoryUsage": self.probe.memory_usage(),
            "serverName": crate::SERVER_NAME,
            "timestamp": self.probe.now().to_rfc3339_opts(SecondsFormat::Millis, true),
        });

        ResourceContent {
            uri: SYSTEM_INFO_URI.to_string(),
            mime_type: "application/json".to_string(),
            text: serde_json::to_string_pretty(&info).unwrap_or_else(|_| "{}".to_string()),
        }
    }

    fn server_stats(&self) -> ResourceContent {
        let uptime_secs = self.probe.uptime() as u64;
        let memory_mb = self.probe.memory_usage().heap_used / 1024 / 1024;
        let timestamp = self
            .probe
            .now()
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        let stats = format!(
            "MCP Server Statistics\n\
             ======================\n\
             Server Name: {}\n\
             Version: {}\n\
             Uptime: {uptime_secs} seconds\n\
             Memory Usage: {memory_mb} MB\n\
             Available Tools: 3 (get_weather, calculate, generate_uuid)\n\
             Available Resources: 2 (system-info, server-stats)\n\
             Last Updated: {timestamp}",
            crate::SERVER_NAME,
            crate::SERVER_VERSION,
        );

        ResourceContent {
            uri: SERVER_STATS_URI.to_string(),
            mime_type: "text/plain".to_string(),
            text: stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::FixedProbe;
    use serde_json::Value;

    fn reader() -> ResourceReader {
        ResourceReader::new(Arc::new(FixedProbe))
    }

    #[test]
    fn test_system_info_is_valid_json_with_expected_keys() {
        let content = reader().read(SYSTEM_INFO_URI).unwrap();
        assert_eq!(content.uri, SYSTEM_INFO_URI);
        assert_eq!(content.mime_type, "application/json");

        let parsed: Value = serde_json::from_str(&content.text).unwrap();
        assert_eq!(parsed["platform"], "test-os");
        assert_eq!(parsed["runtimeVersion"], "rust-test");
        assert_eq!(parsed["uptime"], 42.5);
        assert!(parsed["memoryUsage"]["rss"].is_u64());
        assert!(parsed["memoryUsage"]["heapUsed"].is_u64());
        assert_eq!(parsed["serverName"], crate::SERVER_NAME);
        assert!(parsed["timestamp"].as_str().unwrap().starts_with("2024-06-01"));
    }

    #[test]
    fn test_server_stats_is_plain_text_report() {
        let content = reader().read(SERVER_STATS_URI).unwrap();
        assert_eq!(content.mime_type, "text/plain");

        let text = &content.text;
        assert!(text.starts_with("MCP Server Statistics"));
        assert!(text.contains(&format!("Server Name: {}", crate::SERVER_NAME)));
        assert!(text.contains(&format!("Version: {}", crate::SERVER_VERSION)));
        assert!(text.contains("Uptime: 42 seconds"));
        assert!(text.contains("Memory Usage: 5 MB"));
        assert!(text.contains("Available Tools: 3"));
        assert!(text.contains("Available Resources: 2"));
    }

    #[test]
    fn test_unknown_uri_is_hard_error() {
        let err = reader().read("demo://unknown").unwrap_err();
        assert!(matches!(err, ServerError::ResourceNotFound(uri) if uri == "demo://unknown"));
    }
}
