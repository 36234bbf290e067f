//! The `Tool` trait the registry dispatches to, plus a closure-backed impl.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use super::arguments::ToolArguments;
use super::types::AgentToolParameters;
use crate::error::AgentError;

/// A function the model may call by name.
///
/// The registry validates arguments against [`Tool::parameters`] before
/// calling [`Tool::execute`], so implementations only check domain rules such
/// as a zero divisor.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the model uses in a tool call, e.g. `add`.
    fn name(&self) -> &str;

    /// Sent to the model alongside the schema.
    fn description(&self) -> &str;

    fn parameters(&self) -> &AgentToolParameters;

    /// Run with validated arguments. An `Err` is reported back to the model as
    /// an error result rather than ending the run.
    async fn execute(&self, args: &ToolArguments) -> Result<serde_json::Value, AgentError>;
}

type ToolHandler = dyn Fn(ToolArguments) -> Pin<Box<dyn Future<Output = Result<serde_json::Value, AgentError>> + Send>>
    + Send
    + Sync;

/// Tool backed by an async closure. `add`, `multiply` and `divide` are built
/// this way.
pub struct AgentTool {
    name: String,
    description: String,
    parameters: AgentToolParameters,
    handler: Arc<ToolHandler>,
}

impl AgentTool {
    pub fn new<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: AgentToolParameters,
        handler: F,
    ) -> Self
    where
        F: Fn(ToolArguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<serde_json::Value, AgentError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            handler: Arc::new(move |args| Box::pin(handler(args))),
        }
    }
}

#[async_trait]
impl Tool for AgentTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> &AgentToolParameters {
        &self.parameters
    }

    async fn execute(&self, args: &ToolArguments) -> Result<serde_json::Value, AgentError> {
        (self.handler)(args.clone()).await
    }
}

impl std::fmt::Debug for AgentTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentTool")
            .field("name", &self.name)
            .field("tool_schema", &self.parameters.schema)
            .finish_non_exhaustive()
    }
}
