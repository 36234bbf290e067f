//! Parameter schemas for tools.

use serde::{Deserialize, Serialize};

/// JSON Schema-based parameter definition for a tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentToolParameters {
    /// JSON Schema object describing the parameters.
    pub schema: serde_json::Value,
}

impl AgentToolParameters {
    /// Create from a raw JSON Schema value.
    pub fn from_schema(schema: serde_json::Value) -> Self {
        Self { schema }
    }

    /// Create an empty parameter schema (no parameters).
    pub fn empty() -> Self {
        Self {
            schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": [],
            }),
        }
    }

    /// Builder: create an object schema with properties.
    pub fn object() -> ParameterBuilder {
        ParameterBuilder {
            properties: serde_json::Map::new(),
            required: Vec::new(),
        }
    }
}

/// Builder for constructing tool parameter schemas.
pub struct ParameterBuilder {
    properties: serde_json::Map<String, serde_json::Value>,
    required: Vec<String>,
}

impl ParameterBuilder {
    fn property(
        mut self,
        name: impl Into<String>,
        json_type: &str,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        let name = name.into();
        self.properties.insert(
            name.clone(),
            serde_json::json!({
                "type": json_type,
                "description": description.into(),
            }),
        );
        if required {
            self.required.push(name);
        }
        self
    }

    /// Add an integer property.
    pub fn integer(self, name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        self.property(name, "integer", description, required)
    }

    /// Add a number property.
    pub fn number(self, name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        self.property(name, "number", description, required)
    }

    /// Add a string property.
    pub fn string(self, name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        self.property(name, "string", description, required)
    }

    /// Build into AgentToolParameters.
    pub fn build(self) -> AgentToolParameters {
        AgentToolParameters {
            schema: serde_json::json!({
                "type": "object",
                "properties": self.properties,
                "required": self.required,
                "additionalProperties": false,
            }),
        }
    }
}
