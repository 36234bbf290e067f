//! Shared test helpers and a scripted mock provider.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use tallyloop::error::AgentError;
use tallyloop::provider::{ModelProvider, ProviderRequest, ProviderResponse};
use tallyloop::types::*;

/// A provider that replays queued responses and records every request.
pub struct ScriptedProvider {
    model_id: String,
    responses: Mutex<VecDeque<Result<ProviderResponse, AgentError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            model_id: "scripted-model".to_string(),
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a plain text answer.
    pub fn queue_text(&self, text: &str) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(ProviderResponse {
            text: text.to_string(),
            usage: Usage {
                input_tokens: 10,
                output_tokens: 20,
                total_tokens: 30,
            },
            tool_calls: vec![],
            finish_reason: Some(FinishReason::Stop),
        }));
        self
    }

    /// Queue a response requesting the given tool calls.
    pub fn queue_tool_calls(&self, calls: &[(&str, &str, serde_json::Value)]) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(ProviderResponse {
            text: String::new(),
            usage: Usage {
                input_tokens: 10,
                output_tokens: 5,
                total_tokens: 15,
            },
            tool_calls: calls
                .iter()
                .map(|(id, name, args)| AgentToolCall::new(*id, *name, args.clone()))
                .collect(),
            finish_reason: Some(FinishReason::ToolCalls),
        }));
        self
    }

    /// Queue an error.
    pub fn queue_error(&self, err: AgentError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelProvider for ScriptedProvider {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn complete(&self, request: &ProviderRequest) -> Result<ProviderResponse, AgentError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AgentError::service(500, "script exhausted")))
    }
}
