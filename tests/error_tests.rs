//! Tests for the error taxonomy.

use tallyloop::error::*;

#[test]
fn display_messages_are_descriptive() {
    assert_eq!(
        AgentError::service(404, "Not found").to_string(),
        "Service error (status 404): Not found"
    );
    assert_eq!(
        AgentError::invalid_arguments("divide", "division by zero").to_string(),
        "Invalid arguments for tool 'divide': division by zero"
    );
    assert_eq!(AgentError::UnknownTool("pow".into()).to_string(), "Unknown tool: pow");
    assert_eq!(
        AgentError::Configuration("Missing OPENAI_API_KEY".into()).to_string(),
        "Configuration error: Missing OPENAI_API_KEY"
    );
}

#[test]
fn classification_is_stable_for_each_variant() {
    struct Case {
        error: AgentError,
        category: ErrorCategory,
        retryable: bool,
        recoverable_tool_error: bool,
        recovery: RecoverySuggestion,
    }

    let transport = reqwest::Client::new().get("http://[::1").build().unwrap_err();
    let serde_error = serde_json::from_str::<serde_json::Value>("{not-json}").unwrap_err();

    let cases = vec![
        Case {
            error: AgentError::Configuration("dup".into()),
            category: ErrorCategory::Configuration,
            retryable: false,
            recoverable_tool_error: false,
            recovery: RecoverySuggestion::CheckConfiguration,
        },
        Case {
            error: AgentError::Transport(transport),
            category: ErrorCategory::Network,
            retryable: true,
            recoverable_tool_error: false,
            recovery: RecoverySuggestion::RetryWithBackoff,
        },
        Case {
            error: AgentError::service(401, "bad key"),
            category: ErrorCategory::Authentication,
            retryable: false,
            recoverable_tool_error: false,
            recovery: RecoverySuggestion::CheckCredentials,
        },
        Case {
            error: AgentError::service(429, "slow down"),
            category: ErrorCategory::RateLimit,
            retryable: true,
            recoverable_tool_error: false,
            recovery: RecoverySuggestion::RetryWithBackoff,
        },
        Case {
            error: AgentError::service(503, "unavailable"),
            category: ErrorCategory::Server,
            retryable: true,
            recoverable_tool_error: false,
            recovery: RecoverySuggestion::RetryWithBackoff,
        },
        Case {
            error: AgentError::service(400, "bad request"),
            category: ErrorCategory::Api,
            retryable: false,
            recoverable_tool_error: false,
            recovery: RecoverySuggestion::InspectResponse,
        },
        Case {
            error: AgentError::invalid_arguments("add", "missing field"),
            category: ErrorCategory::ToolCall,
            retryable: false,
            recoverable_tool_error: true,
            recovery: RecoverySuggestion::LetModelSelfCorrect,
        },
        Case {
            error: AgentError::UnknownTool("pow".into()),
            category: ErrorCategory::ToolCall,
            retryable: false,
            recoverable_tool_error: true,
            recovery: RecoverySuggestion::LetModelSelfCorrect,
        },
        Case {
            error: AgentError::Serialization(serde_error),
            category: ErrorCategory::Serialization,
            retryable: false,
            recoverable_tool_error: false,
            recovery: RecoverySuggestion::InspectResponse,
        },
        Case {
            error: AgentError::Timeout(5000),
            category: ErrorCategory::Timeout,
            retryable: true,
            recoverable_tool_error: false,
            recovery: RecoverySuggestion::IncreaseTimeout,
        },
        Case {
            error: AgentError::RecursionLimit(25),
            category: ErrorCategory::Loop,
            retryable: false,
            recoverable_tool_error: false,
            recovery: RecoverySuggestion::RaiseRecursionLimit,
        },
    ];

    for case in cases {
        assert_eq!(case.error.category(), case.category, "{}", case.error);
        assert_eq!(case.error.is_retryable(), case.retryable, "{}", case.error);
        assert_eq!(
            case.error.is_recoverable_tool_error(),
            case.recoverable_tool_error,
            "{}",
            case.error
        );
        assert_eq!(case.error.recovery_suggestion(), case.recovery, "{}", case.error);
    }
}
