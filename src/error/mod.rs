//! Error types for tallyloop.

pub mod unified;

pub use unified::{ErrorCategory, RecoverySuggestion};

use thiserror::Error;

/// Primary error type for all tallyloop operations.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("Invalid arguments for tool '{tool}': {message}")]
    InvalidArguments { tool: String, message: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Recursion limit of {0} model calls reached without a final answer")]
    RecursionLimit(usize),
}

impl AgentError {
    /// Create a service error from a status code and body.
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid-arguments error for a tool.
    pub fn invalid_arguments(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Transport(_) => ErrorCategory::Network,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Service { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::InvalidArguments { .. } | Self::UnknownTool(_) => ErrorCategory::ToolCall,
            Self::RecursionLimit(_) => ErrorCategory::Loop,
        }
    }

    /// Whether this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit
                | ErrorCategory::Network
                | ErrorCategory::Timeout
                | ErrorCategory::Server
        )
    }

    /// Whether the control loop feeds this error back to the model instead of aborting.
    pub fn is_recoverable_tool_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::ToolCall)
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self.category() {
            ErrorCategory::Authentication => RecoverySuggestion::CheckCredentials,
            ErrorCategory::RateLimit => RecoverySuggestion::RetryWithBackoff,
            ErrorCategory::Network => RecoverySuggestion::RetryWithBackoff,
            ErrorCategory::Timeout => RecoverySuggestion::IncreaseTimeout,
            ErrorCategory::Server => RecoverySuggestion::RetryWithBackoff,
            ErrorCategory::Configuration => RecoverySuggestion::CheckConfiguration,
            ErrorCategory::ToolCall => RecoverySuggestion::LetModelSelfCorrect,
            ErrorCategory::Loop => RecoverySuggestion::RaiseRecursionLimit,
            _ => RecoverySuggestion::InspectResponse,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AgentError>;
