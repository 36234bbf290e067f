//! Model provider trait and implementations.

pub mod http;
pub mod openai;
pub mod resilient;

use async_trait::async_trait;

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::types::{AgentToolCall, FinishReason, GenerationSettings, ModelMessage, Usage};

pub use openai::OpenAiProvider;
pub use resilient::ResilientProvider;

/// A request sent to a model provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub messages: Vec<ModelMessage>,
    pub settings: GenerationSettings,
    pub tools: Vec<ToolDefinition>,
}

/// Tool definition sent to the provider API.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Response from a provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderResponse {
    pub text: String,
    pub usage: Usage,
    pub tool_calls: Vec<AgentToolCall>,
    pub finish_reason: Option<FinishReason>,
}

impl ProviderResponse {
    /// The assistant message this response appends to the conversation.
    pub fn to_message(&self) -> ModelMessage {
        if self.tool_calls.is_empty() {
            ModelMessage::assistant(self.text.clone())
        } else {
            ModelMessage::assistant_with_tool_calls(self.text.clone(), self.tool_calls.clone())
        }
    }
}

/// A remote chat-completion service.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &str;

    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Send the conversation and tool schemas; get a final answer or tool calls.
    ///
    /// Does not retry. Network failures surface as `Transport`, non-success
    /// responses as `Service`.
    async fn complete(&self, request: &ProviderRequest) -> Result<ProviderResponse, AgentError>;
}

/// Create the OpenAI-compatible provider described by `config`.
///
/// Fails with `Configuration` when no API key is set, before any network call.
pub fn create_provider(config: &AgentConfig) -> Result<OpenAiProvider, AgentError> {
    let api_key = config.api_key()?;
    OpenAiProvider::new(config.model.clone(), api_key.to_string(), config.base_url.clone())
}
