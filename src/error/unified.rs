//! Error classification and recovery hints.

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Network,
    Timeout,
    Server,
    Api,
    Configuration,
    Serialization,
    /// Bad tool name or arguments coming from the model.
    ToolCall,
    /// The control loop gave up.
    Loop,
}

/// Suggested recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    RetryWithBackoff,
    CheckCredentials,
    CheckConfiguration,
    IncreaseTimeout,
    LetModelSelfCorrect,
    RaiseRecursionLimit,
    InspectResponse,
}
