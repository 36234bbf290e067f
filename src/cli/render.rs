//! Plain-text rendering of transcripts and tool listings.

use std::fmt::Write as _;

use crate::agent_loop::{RunEvent, RunEventPayload, RunLifecycle};
use crate::tools::ToolRegistry;
use crate::types::{ContentPart, ModelMessage, Role};

const RULE_WIDTH: usize = 80;

fn header(title: &str) -> String {
    let title = format!(" {title} ");
    let width = title.chars().count();
    let left = RULE_WIDTH.saturating_sub(width) / 2;
    let right = RULE_WIDTH.saturating_sub(width + left);
    format!("{}{}{}", "=".repeat(left), title, "=".repeat(right))
}

fn title(role: Role) -> &'static str {
    match role {
        Role::System => "System Message",
        Role::User => "Human Message",
        Role::Assistant => "Ai Message",
        Role::Tool => "Tool Message",
    }
}

/// Render one message: a centered header, then its text, tool calls or result.
pub fn render_message(message: &ModelMessage) -> String {
    let mut out = header(title(message.role));
    out.push('\n');
    for part in &message.content {
        match part {
            ContentPart::Text { text } => {
                let _ = write!(out, "\n{text}");
            }
            ContentPart::ToolCall(call) => {
                let _ = write!(out, "\nTool Call: {} ({})\n Args: {}", call.name, call.id, call.arguments);
            }
            ContentPart::ToolResult(result) => {
                let status = if result.is_error { " [error]" } else { "" };
                let _ = write!(out, "\n[{}]{} {}", result.tool_call_id, status, result.result);
            }
        }
    }
    out
}

/// Render a full transcript followed by the model-call count.
pub fn render_transcript(messages: &[ModelMessage], llm_calls: usize) -> String {
    let mut out = String::new();
    for message in messages {
        out.push_str(&render_message(message));
        out.push('\n');
    }
    let _ = write!(out, "\nLLM calls: {llm_calls}");
    out
}

/// One line per step, for `--trace`.
pub fn render_event(event: &RunEvent) -> String {
    match &event.payload {
        RunEventPayload::Lifecycle { state } => match state {
            RunLifecycle::Started => format!("[{}] run started", event.seq),
            RunLifecycle::Completed => format!("[{}] run completed", event.seq),
            RunLifecycle::Failed { error } => format!("[{}] run failed: {error}", event.seq),
        },
        RunEventPayload::ModelStep { llm_calls, message } => {
            let calls: Vec<String> = message
                .tool_calls()
                .iter()
                .map(|c| format!("{}({})", c.name, c.arguments))
                .collect();
            if calls.is_empty() {
                format!("[{}] llm_call #{llm_calls}: {}", event.seq, message.text())
            } else {
                format!("[{}] llm_call #{llm_calls}: {}", event.seq, calls.join(", "))
            }
        }
        RunEventPayload::ToolStep { results } => {
            let parts: Vec<String> = results
                .iter()
                .filter_map(|m| m.tool_result_part())
                .map(|r| format!("{} -> {}", r.tool_call_id, r.result))
                .collect();
            format!("[{}] tool_node: {}", event.seq, parts.join(", "))
        }
    }
}

/// Tool names, descriptions and schemas.
pub fn render_tools(registry: &ToolRegistry) -> String {
    let mut out = String::new();
    for def in registry.definitions() {
        let _ = writeln!(out, "{}: {}", def.name, def.description);
        let _ = writeln!(out, "  {}", def.parameters);
    }
    out
}
