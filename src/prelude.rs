//! Convenience re-exports for common use.

pub use crate::agent_loop::{LoopRunner, RunOutcome, RunState};
pub use crate::config::AgentConfig;
pub use crate::error::{AgentError, Result};
pub use crate::provider::{ModelProvider, ProviderRequest, ProviderResponse};
pub use crate::tools::{arithmetic_registry, AgentTool, AgentToolParameters, Tool, ToolArguments, ToolRegistry};
pub use crate::types::{AgentToolCall, ContentPart, GenerationSettings, ModelMessage, Role, Usage};
