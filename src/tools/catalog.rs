//! Static tool catalog

use serde_json::json;

use crate::protocol::{McpInputSchema, McpTool};

/// List the fixed tool descriptors, in stable order.
pub fn catalog() -> Vec<McpTool> {
    vec![
        McpTool {
            name: "get_weather".to_string(),
            description: Some("Get current weather for a city".to_string()),
            input_schema: McpInputSchema {
                schema_type: "object".to_string(),
                properties: Some(
                    json!({
                        "city": {
                            "type": "string",
                            "description": "City name"
                        }
                    })
                    .as_object()
                    .cloned()
                    .unwrap_or_default(),
                ),
                required: Some(vec!["city".to_string()]),
            },
        },
        McpTool {
            name: "calculate".to_string(),
            description: Some("Perform basic mathematical calculations".to_string()),
            input_schema: McpInputSchema {
                schema_type: "object".to_string(),
                properties: Some(
                    json!({
                        "expression": {
                            "type": "string",
                            "description": "Mathematical expression (e.g., '2 + 3 * 4')"
                        }
                    })
                    .as_object()
                    .cloned()
                    .unwrap_or_default(),
                ),
                required: Some(vec!["expression".to_string()]),
            },
        },
        McpTool {
            name: "generate_uuid".to_string(),
            description: Some("Generate a random UUID".to_string()),
            input_schema: McpInputSchema {
                schema_type: "object".to_string(),
                properties: Some(serde_json::Map::new()),
                required: None,
            },
        },
    ]
}
