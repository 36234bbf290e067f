//! The model ⇄ tools control loop.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::{AgentError, Result};
use crate::provider::{ModelProvider, ProviderRequest, ProviderResponse};
use crate::tools::ToolRegistry;
use crate::types::{AgentToolCall, GenerationSettings, ModelMessage, Usage};

use super::events::{RunEventEmitter, RunEventPayload, RunEventSink, RunLifecycle};
use super::types::{LoopState, RunId, RunOutcome, RunState};

/// System prompt prepended to every model call.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant tasked with performing arithmetic on a set of inputs.";

/// Model calls allowed per run before giving up.
///
/// Only model calls count toward the limit; tool rounds are free. A run that
/// hits it has made 25 model calls and up to 24 tool rounds.
pub const DEFAULT_RECURSION_LIMIT: usize = 25;

/// Runs the `AwaitingModel` → `ExecutingTools` → … → `Done` cycle.
///
/// A runner holds no per-run state and can be reused; every call to
/// [`LoopRunner::run`] gets its own [`RunState`].
pub struct LoopRunner {
    provider: Arc<dyn ModelProvider>,
    tools: Arc<ToolRegistry>,
    system_prompt: Option<String>,
    settings: GenerationSettings,
    recursion_limit: usize,
    event_sink: Option<RunEventSink>,
}

impl LoopRunner {
    pub fn new(provider: Arc<dyn ModelProvider>, tools: Arc<ToolRegistry>) -> Self {
        Self {
            provider,
            tools,
            system_prompt: Some(DEFAULT_SYSTEM_PROMPT.to_string()),
            settings: GenerationSettings::default(),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            event_sink: None,
        }
    }

    /// Replace the system prompt; `None` sends the history alone.
    pub fn with_system_prompt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn with_event_sink(mut self, sink: RunEventSink) -> Self {
        self.event_sink = Some(sink);
        self
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Run the loop for a single user prompt.
    pub async fn run(&self, prompt: impl Into<String>) -> Result<RunOutcome> {
        self.run_state(RunState::from_prompt(prompt)).await
    }

    /// Run the loop starting from an existing state.
    pub async fn run_state(&self, state: RunState) -> Result<RunOutcome> {
        let run_id = Uuid::new_v4();
        let emitter = RunEventEmitter::new(run_id, self.event_sink.clone());
        emitter.lifecycle(RunLifecycle::Started);
        debug!(%run_id, model = self.provider.model_id(), "run start");

        match self.drive(run_id, state, &emitter).await {
            Ok(outcome) => {
                emitter.lifecycle(RunLifecycle::Completed);
                info!(
                    %run_id,
                    llm_calls = outcome.llm_calls,
                    messages = outcome.messages.len(),
                    "run completed"
                );
                Ok(outcome)
            }
            Err(err) => {
                emitter.lifecycle(RunLifecycle::Failed {
                    error: err.to_string(),
                });
                error!(%run_id, error = %err, "run failed");
                Err(err)
            }
        }
    }

    async fn drive(
        &self,
        run_id: RunId,
        mut state: RunState,
        emitter: &RunEventEmitter,
    ) -> Result<RunOutcome> {
        let mut usage = Usage::default();
        let mut pending: Vec<AgentToolCall> = Vec::new();
        let mut loop_state = LoopState::AwaitingModel;

        loop {
            debug!(%run_id, state = %loop_state, llm_calls = state.llm_calls(), "loop step");
            match loop_state {
                LoopState::AwaitingModel => {
                    if state.llm_calls() >= self.recursion_limit {
                        return Err(AgentError::RecursionLimit(self.recursion_limit));
                    }
                    let response = self.call_model(&state).await?;
                    usage.merge(&response.usage);

                    let message = response.to_message();
                    state.append([message.clone()]);
                    let llm_calls = state.record_llm_call();
                    emitter.emit(RunEventPayload::ModelStep { llm_calls, message });

                    pending = response.tool_calls;
                    loop_state = if pending.is_empty() {
                        LoopState::Done
                    } else {
                        LoopState::ExecutingTools
                    };
                }
                LoopState::ExecutingTools => {
                    let results = self.execute_tools(&pending).await;
                    pending.clear();
                    state.append(results.clone());
                    emitter.emit(RunEventPayload::ToolStep { results });
                    loop_state = LoopState::AwaitingModel;
                }
                LoopState::Done => break,
            }
        }

        let text = state.last().map(ModelMessage::text).unwrap_or_default();
        let llm_calls = state.llm_calls();
        Ok(RunOutcome {
            run_id,
            text,
            messages: state.into_messages(),
            llm_calls,
            usage,
        })
    }

    async fn call_model(&self, state: &RunState) -> Result<ProviderResponse> {
        let mut messages = Vec::with_capacity(state.messages().len() + 1);
        if let Some(prompt) = &self.system_prompt {
            messages.push(ModelMessage::system(prompt.clone()));
        }
        messages.extend(state.messages().iter().cloned());

        let request = ProviderRequest {
            messages,
            settings: self.settings.clone(),
            tools: self.tools.definitions(),
        };
        self.provider.complete(&request).await
    }

    /// One result message per call, in request order. Tool failures become
    /// error results so the model can react to them.
    async fn execute_tools(&self, calls: &[AgentToolCall]) -> Vec<ModelMessage> {
        let mut results = Vec::with_capacity(calls.len());
        for call in calls {
            let message = match self.tools.invoke(&call.name, call.arguments.clone()).await {
                Ok(value) => ModelMessage::tool_result(&call.id, value, false),
                Err(err) => {
                    if err.is_recoverable_tool_error() {
                        warn!(tool = %call.name, call_id = %call.id, error = %err, "tool call rejected");
                    } else {
                        error!(tool = %call.name, call_id = %call.id, error = %err, "tool failed");
                    }
                    ModelMessage::tool_result(&call.id, json!({ "error": err.to_string() }), true)
                }
            };
            results.push(message);
        }
        results
    }
}
