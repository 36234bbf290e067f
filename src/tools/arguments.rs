//! Typed access to tool call arguments.

use crate::error::AgentError;

/// Wrapper around tool call arguments providing typed extraction.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    tool: String,
    value: serde_json::Value,
}

impl ToolArguments {
    /// Wrap the arguments of a call to `tool`.
    ///
    /// Some models send the argument object as a JSON-encoded string; such
    /// strings are decoded here so validation sees the object. A string that
    /// is not valid JSON is kept as-is and rejected later by validation.
    pub fn new(tool: impl Into<String>, value: serde_json::Value) -> Self {
        let value = match value {
            serde_json::Value::String(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    serde_json::json!({})
                } else {
                    serde_json::from_str(trimmed).unwrap_or(serde_json::Value::String(raw))
                }
            }
            other => other,
        };
        Self {
            tool: tool.into(),
            value,
        }
    }

    /// Name of the tool these arguments were sent to.
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Get the raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get an integer argument.
    pub fn get_i64(&self, key: &str) -> Result<i64, AgentError> {
        self.value
            .get(key)
            .and_then(|v| v.as_i64())
            .ok_or_else(|| self.invalid(format!("missing integer argument: {key}")))
    }

    /// Deserialize the entire arguments into a typed struct.
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T, AgentError> {
        serde_json::from_value(self.value.clone())
            .map_err(|e| self.invalid(format!("failed to deserialize arguments: {e}")))
    }

    pub(crate) fn normalize_integers(&mut self, schema: &serde_json::Value) {
        super::validation::normalize_integers(&mut self.value, schema);
    }

    /// Build an `InvalidArguments` error attributed to this tool.
    pub fn invalid(&self, message: impl Into<String>) -> AgentError {
        AgentError::invalid_arguments(&self.tool, message)
    }
}
