//! Closed name → tool registry with validated dispatch.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use super::arguments::ToolArguments;
use super::tool::{AgentTool, Tool};
use super::types::AgentToolParameters;
use super::validation::validate_arguments;
use crate::error::{AgentError, Result};
use crate::provider::ToolDefinition;

/// Tools available to the model, keyed by name.
///
/// Built once at startup, then shared read-only (typically behind an `Arc`).
/// Registration order is preserved so tool definitions reach the model in a
/// stable order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Fails if a tool with the same name already exists.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        let name = tool.name().to_string();
        if self.by_name.contains_key(&name) {
            return Err(AgentError::Configuration(format!(
                "tool '{name}' is already registered"
            )));
        }
        self.by_name.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Register a closure as a tool.
    pub fn register_fn<F, Fut>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: AgentToolParameters,
        handler: F,
    ) -> Result<()>
    where
        F: Fn(ToolArguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<serde_json::Value>> + Send + 'static,
    {
        self.register(Arc::new(AgentTool::new(name, description, parameters, handler)))
    }

    /// Builder-style registration.
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Result<Self> {
        self.register(tool)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.by_name.get(name).map(|&idx| &self.tools[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tool names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Definitions sent to the model, in registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                parameters: t.parameters().schema.clone(),
            })
            .collect()
    }

    /// Look up `name`, validate `args` against its schema, and run it.
    pub async fn invoke(&self, name: &str, args: serde_json::Value) -> Result<serde_json::Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| AgentError::UnknownTool(name.to_string()))?;
        let schema = &tool.parameters().schema;
        let mut args = ToolArguments::new(name, args);
        validate_arguments(args.raw(), schema)
            .map_err(|message| AgentError::invalid_arguments(name, message))?;
        args.normalize_integers(schema);
        debug!(tool = name, "invoking tool");
        tool.execute(&args).await
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}
