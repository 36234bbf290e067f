//! OpenAI Chat Completions API provider.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::AgentError;
use crate::types::*;

use super::http::{bearer_headers, build_client, status_to_error};
use super::{ModelProvider, ProviderRequest, ProviderResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for `POST {base_url}/chat/completions`.
#[derive(Debug)]
pub struct OpenAiProvider {
    model: String,
    base_url: String,
    headers: HeaderMap,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(
        model: impl Into<String>,
        api_key: String,
        base_url: Option<String>,
    ) -> Result<Self, AgentError> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            model: model.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: bearer_headers(&api_key)?,
            client: build_client()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request_body(&self, request: &ProviderRequest) -> Value {
        let messages: Vec<Value> = request.messages.iter().map(message_to_openai).collect();

        let mut body = serde_json::Map::new();
        body.insert("model".into(), self.model.clone().into());
        body.insert("messages".into(), messages.into());

        if let Some(temp) = request.settings.temperature {
            body.insert("temperature".into(), temp.into());
        }
        if let Some(max) = request.settings.max_tokens {
            body.insert("max_tokens".into(), max.into());
        }

        if !request.tools.is_empty() {
            let tool_defs: Vec<Value> = request
                .tools
                .iter()
                .map(|t| {
                    json!({
                        "type": "function",
                        "function": {
                            "name": t.name,
                            "description": t.description,
                            "parameters": t.parameters,
                        }
                    })
                })
                .collect();
            body.insert("tools".into(), tool_defs.into());
        }

        Value::Object(body)
    }
}

#[async_trait]
impl ModelProvider for OpenAiProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &ProviderRequest) -> Result<ProviderResponse, AgentError> {
        let body = self.build_request_body(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %self.model, messages = request.messages.len(), "OpenAI complete");

        let resp = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status.as_u16(), &body_text));
        }

        let body_text = resp.text().await?;
        let data: OpenAiChatResponse = serde_json::from_str(&body_text)?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AgentError::service(status.as_u16(), "no choices in completion response"))?;

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|tc| AgentToolCall {
                id: tc.id,
                name: tc.function.name,
                arguments: serde_json::from_str(&tc.function.arguments)
                    .unwrap_or(Value::String(tc.function.arguments)),
            })
            .collect();

        Ok(ProviderResponse {
            text: choice.message.content.unwrap_or_default(),
            usage: data
                .usage
                .map(|u| Usage {
                    input_tokens: u.prompt_tokens,
                    output_tokens: u.completion_tokens,
                    total_tokens: u.total_tokens,
                })
                .unwrap_or_default(),
            tool_calls,
            finish_reason: choice.finish_reason.as_deref().and_then(|r| r.parse().ok()),
        })
    }
}

fn message_to_openai(msg: &ModelMessage) -> Value {
    if let Some(tr) = msg.tool_result_part() {
        return json!({
            "role": "tool",
            "tool_call_id": tr.tool_call_id,
            "content": tool_result_content(&tr.result),
        });
    }

    let text = msg.text();
    let tool_calls = msg.tool_calls();
    if tool_calls.is_empty() {
        return json!({ "role": msg.role.to_string(), "content": text });
    }

    let tc_json: Vec<Value> = tool_calls
        .iter()
        .map(|tc| {
            json!({
                "id": tc.id,
                "type": "function",
                "function": {
                    "name": tc.name,
                    "arguments": tc.arguments.to_string(),
                }
            })
        })
        .collect();
    json!({
        "role": msg.role.to_string(),
        "content": if text.is_empty() { Value::Null } else { Value::String(text) },
        "tool_calls": tc_json,
    })
}

/// Strings go over the wire as-is; everything else as compact JSON.
fn tool_result_content(result: &Value) -> String {
    match result {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// OpenAI API response types (internal)

#[derive(Deserialize)]
struct OpenAiChatResponse {
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
    tool_calls: Option<Vec<OpenAiToolCall>>,
}

#[derive(Deserialize)]
struct OpenAiToolCall {
    id: String,
    function: OpenAiFunction,
}

#[derive(Deserialize)]
struct OpenAiFunction {
    name: String,
    arguments: String,
}

#[derive(Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
