//! Tool descriptors, requests and results exchanged with the caller.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;

/// Name, description and argument schema of one invocable tool.
///
/// Built once when the registry is first touched and never mutated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON Schema object for the tool arguments.
    pub input_schema: Arc<Map<String, Value>>,
}

impl ToolDescriptor {
    /// Names of the fields the schema marks as required.
    pub fn required_fields(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(Value::as_array)
            .map(|fields| fields.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// A call to a named tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolRequest {
    pub name: String,
    /// Argument object. `null` is treated as `{}`.
    #[serde(default)]
    pub arguments: Value,
}

impl ToolRequest {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// The single response to one tool invocation.
///
/// Serializes flat: `{"success": .., "error": .., <payload fields>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl ToolResult {
    /// Successful result carrying the fields of `payload`.
    pub fn success<T: Serialize>(payload: &T) -> Result<Self, AppError> {
        Self::reported(true, payload)
    }

    /// Result whose success flag is decided by the operation itself, e.g. a
    /// command that ran but exited non-zero.
    pub fn reported<T: Serialize>(success: bool, payload: &T) -> Result<Self, AppError> {
        let payload = match serde_json::to_value(payload)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => Map::from_iter([("result".to_string(), other)]),
        };
        Ok(Self {
            success,
            error: None,
            payload,
        })
    }

    /// Failed result with a human-readable error.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            payload: Map::new(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.payload.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Pretty JSON with two-space indentation, the wire form of a result.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            format!(
                "{{\"success\": false, \"error\": \"result serialization failed: {}\"}}",
                e
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Message {
        message: String,
    }

    #[test]
    fn test_success_flattens_payload() {
        let result = ToolResult::success(&Message {
            message: "done".to_string(),
        })
        .unwrap();

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({"success": true, "message": "done"}));
    }

    #[test]
    fn test_failure_serialization() {
        let value = serde_json::to_value(ToolResult::failure("boom")).unwrap();
        assert_eq!(value, json!({"success": false, "error": "boom"}));
    }

    #[test]
    fn test_reported_keeps_payload_on_failure() {
        let result = ToolResult::reported(false, &json!({"stdout": "x", "returncode": 2})).unwrap();
        assert!(!result.success);
        assert_eq!(result.get_str("stdout"), Some("x"));
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_pretty_json_round_trips() {
        let result = ToolResult::success(&json!({"tree": "root/"})).unwrap();
        let text = result.to_pretty_json();
        assert!(text.contains("\n  \"success\": true"));
        let parsed: ToolResult = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_request_deserializes_without_arguments() {
        let request: ToolRequest = serde_json::from_str(r#"{"name": "godot_run"}"#).unwrap();
        assert_eq!(request.name, "godot_run");
        assert!(request.arguments.is_null());
    }
}
