//! Tool dispatch and execution

use std::sync::Arc;

use chrono::SecondsFormat;
use rand::Rng;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use super::calculator;
use crate::error::ServerError;
use crate::introspect::ProcessProbe;
use crate::protocol::ToolCallResult;

const WEATHER_CONDITIONS: [&str; 4] = ["Sunny", "Cloudy", "Rainy", "Snowy"];

/// Executor for the fixed demo tools
pub struct ToolExecutor {
    probe: Arc<dyn ProcessProbe>,
}

impl ToolExecutor {
    /// Create a new tool executor
    pub fn new(probe: Arc<dyn ProcessProbe>) -> Self {
        Self { probe }
    }

    /// Execute a tool by name.
    ///
    /// Missing or mistyped arguments come back as soft errors inside the
    /// result; an unknown tool name is a hard `ToolNotFound`. Validation is
    /// per tool, so `calculate` and `generate_uuid` do not require a `city`.
    pub fn execute(
        &self,
        tool_name: &str,
        arguments: Option<Value>,
    ) -> Result<ToolCallResult, ServerError> {
        debug!("Executing tool: {}", tool_name);

        let args = arguments.unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        match tool_name {
            "get_weather" => Ok(self.get_weather(&args)),
            "calculate" => Ok(self.calculate(&args)),
            "generate_uuid" => Ok(self.generate_uuid()),
            other => Err(ServerError::ToolNotFound(other.to_string())),
        }
    }

    fn get_weather(&self, args: &Value) -> ToolCallResult {
        let Some(city) = args.get("city").and_then(Value::as_str) else {
            return ToolCallResult::error("Error: a 'city' string argument is required.");
        };

        let mut rng = rand::thread_rng();
        let temperature: i32 = rng.gen_range(10..50);
        let condition = WEATHER_CONDITIONS[rng.gen_range(0..WEATHER_CONDITIONS.len())];
        let humidity: i32 = rng.gen_range(0..100);
        let timestamp = self
            .probe
            .now()
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        ToolCallResult::text(format!(
            "Weather in {city}:\n\
             Temperature: {temperature}\u{b0}C\n\
             Condition: {condition}\n\
             Humidity: {humidity}%\n\
             Updated: {timestamp}"
        ))
    }

    fn calculate(&self, args: &Value) -> ToolCallResult {
        let Some(expression) = args.get("expression").and_then(Value::as_str) else {
            return ToolCallResult::error("Error: an 'expression' string argument is required.");
        };

        match calculator::evaluate(expression) {
            Ok(value) => ToolCallResult::text(format!(
                "{expression} = {}",
                calculator::format_value(value)
            )),
            Err(e) => ToolCallResult::error(format!("Error calculating \"{expression}\": {e}")),
        }
    }

    fn generate_uuid(&self) -> ToolCallResult {
        let uuid = Uuid::new_v4();
        ToolCallResult::text(format!("Generated UUID: {uuid}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::FixedProbe;
    use serde_json::json;

    fn executor() -> ToolExecutor {
        ToolExecutor::new(Arc::new(FixedProbe))
    }

    fn result_text(result: &ToolCallResult) -> &str {
        let crate::protocol::ToolContent::Text { text } = &result.content[0];
        text
    }

    fn line_value<'a>(text: &'a str, prefix: &str) -> &'a str {
        text.lines()
            .map(str::trim)
            .find_map(|l| l.strip_prefix(prefix))
            .unwrap_or_else(|| panic!("missing line {prefix:?} in {text:?}"))
    }

    #[test]
    fn test_get_weather_reports_city_and_ranges() {
        let result = executor()
            .execute("get_weather", Some(json!({"city": "Paris"})))
            .unwrap();
        assert!(!result.is_error());

        let text = result_text(&result);
        assert!(text.contains("Paris"));

        let temperature: i32 = line_value(text, "Temperature: ")
            .trim_end_matches("\u{b0}C")
            .parse()
            .unwrap();
        assert!((10..50).contains(&temperature));

        let humidity: i32 = line_value(text, "Humidity: ")
            .trim_end_matches('%')
            .parse()
            .unwrap();
        assert!((0..100).contains(&humidity));

        let condition = line_value(text, "Condition: ");
        assert!(WEATHER_CONDITIONS.contains(&condition));
    }

    #[test]
    fn test_get_weather_requires_city_string() {
        let missing = executor().execute("get_weather", None).unwrap();
        assert!(missing.is_error());

        let wrong_type = executor()
            .execute("get_weather", Some(json!({"city": 42})))
            .unwrap();
        assert!(wrong_type.is_error());
    }

    #[test]
    fn test_calculate_respects_precedence() {
        let result = executor()
            .execute("calculate", Some(json!({"expression": "2 + 3 * 4"})))
            .unwrap();
        assert!(!result.is_error());
        assert_eq!(result_text(&result), "2 + 3 * 4 = 14");
    }

    #[test]
    fn test_calculate_division_by_zero_is_soft_error() {
        let result = executor()
            .execute("calculate", Some(json!({"expression": "1 / 0"})))
            .unwrap();
        assert!(result.is_error());
        let text = result_text(&result);
        assert!(text.contains("1 / 0"));
        assert!(text.contains("division by zero"));
    }

    #[test]
    fn test_calculate_rejects_non_arithmetic_input() {
        let result = executor()
            .execute("calculate", Some(json!({"expression": "require('fs')"})))
            .unwrap();
        assert!(result.is_error());
    }

    #[test]
    fn test_calculate_works_without_city_argument() {
        // Per-tool validation: no blanket city check
        let result = executor()
            .execute("calculate", Some(json!({"expression": "1 + 1"})))
            .unwrap();
        assert!(!result.is_error());
    }

    #[test]
    fn test_generate_uuid_is_valid_v4_and_fresh() {
        let executor = executor();

        let first = executor.execute("generate_uuid", Some(json!({}))).unwrap();
        assert!(!first.is_error());
        let first_text = result_text(&first).to_string();
        let uuid_str = first_text.strip_prefix("Generated UUID: ").unwrap();
        let uuid = Uuid::parse_str(uuid_str).unwrap();
        assert_eq!(uuid.get_version_num(), 4);

        let second = executor.execute("generate_uuid", None).unwrap();
        assert_ne!(first_text, result_text(&second));
    }

    #[test]
    fn test_unknown_tool_is_hard_error() {
        let err = executor()
            .execute("nonexistent_tool", Some(json!({"city": "x"})))
            .unwrap_err();
        assert!(matches!(err, ServerError::ToolNotFound(name) if name == "nonexistent_tool"));
    }
}
