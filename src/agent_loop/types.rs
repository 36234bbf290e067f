//! Run state and result types for the control loop.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{ModelMessage, Role, Usage};

/// Unique run identifier.
pub type RunId = Uuid;

/// Control loop states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LoopState {
    AwaitingModel,
    ExecutingTools,
    Done,
}

/// Messages accumulated during one run plus the model-call counter.
///
/// The only way to change the state is [`RunState::append`] and
/// [`RunState::record_llm_call`]: messages are concatenated and never
/// replaced, and `llm_calls` only grows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    messages: Vec<ModelMessage>,
    llm_calls: usize,
}

impl RunState {
    /// Start a run from the user's prompt.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self::from_messages(vec![ModelMessage::user(prompt)])
    }

    pub fn from_messages(messages: Vec<ModelMessage>) -> Self {
        Self {
            messages,
            llm_calls: 0,
        }
    }

    /// Merge an update into the state by concatenation.
    pub fn append(&mut self, update: impl IntoIterator<Item = ModelMessage>) {
        self.messages.extend(update);
    }

    pub fn record_llm_call(&mut self) -> usize {
        self.llm_calls += 1;
        self.llm_calls
    }

    pub fn messages(&self) -> &[ModelMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ModelMessage> {
        self.messages.last()
    }

    pub fn llm_calls(&self) -> usize {
        self.llm_calls
    }

    pub fn into_messages(self) -> Vec<ModelMessage> {
        self.messages
    }

    /// Tool-call ids requested by assistant messages that have no matching
    /// tool-result message yet.
    pub fn unanswered_tool_calls(&self) -> Vec<&str> {
        let answered: std::collections::HashSet<&str> = self
            .messages
            .iter()
            .filter_map(|m| m.tool_result_part())
            .map(|tr| tr.tool_call_id.as_str())
            .collect();
        self.messages
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .flat_map(|m| m.tool_calls())
            .map(|tc| tc.id.as_str())
            .filter(|id| !answered.contains(id))
            .collect()
    }
}

/// Result of a run that reached `Done`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub run_id: RunId,
    /// Final assistant text.
    pub text: String,
    pub messages: Vec<ModelMessage>,
    pub llm_calls: usize,
    pub usage: Usage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentToolCall;
    use serde_json::json;

    #[test]
    fn append_concatenates() {
        let mut state = RunState::from_prompt("Add 3 and 4.");
        let first = state.messages()[0].clone();

        state.append([ModelMessage::assistant("thinking")]);
        state.append(vec![ModelMessage::assistant("7")]);

        assert_eq!(state.messages().len(), 3);
        assert_eq!(state.messages()[0], first);
        assert_eq!(state.last().unwrap().text(), "7");
    }

    #[test]
    fn llm_calls_counts_up() {
        let mut state = RunState::from_prompt("hi");

        assert_eq!(state.llm_calls(), 0);
        assert_eq!(state.record_llm_call(), 1);
        assert_eq!(state.record_llm_call(), 2);
    }

    #[test]
    fn unanswered_tool_calls_tracks_correlation_ids() {
        let mut state = RunState::from_prompt("Add 1 and 2, then multiply 3 by 4.");
        state.append([ModelMessage::assistant_with_tool_calls(
            "",
            vec![
                AgentToolCall::new("c1", "add", json!({"a": 1, "b": 2})),
                AgentToolCall::new("c2", "multiply", json!({"a": 3, "b": 4})),
            ],
        )]);

        assert_eq!(state.unanswered_tool_calls(), vec!["c1", "c2"]);

        state.append([ModelMessage::tool_result("c1", json!(3), false)]);
        assert_eq!(state.unanswered_tool_calls(), vec!["c2"]);

        state.append([ModelMessage::tool_result("c2", json!(12), false)]);
        assert!(state.unanswered_tool_calls().is_empty());
    }

    #[test]
    fn loop_state_display() {
        assert_eq!(LoopState::AwaitingModel.to_string(), "awaiting_model");
        assert_eq!(LoopState::ExecutingTools.to_string(), "executing_tools");
    }
}
