use crate::error::LlmError;
use crate::llm::scrub::sanitize_api_error;
use std::fmt;

/// Why an attempt is worth repeating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransientReason {
    Overloaded,
    RateLimited,
}

impl fmt::Display for TransientReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overloaded => f.write_str("overloaded"),
            Self::RateLimited => f.write_str("rate-limited"),
        }
    }
}

/// Result of a single model attempt, as seen by the retry loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelCallOutcome {
    /// Text came back. May be empty when the model produced nothing.
    Success(String),
    Retryable(TransientReason),
    SafetyBlocked,
    /// Sanitized failure detail; never shown to the user verbatim.
    Fatal(String),
}

impl ModelCallOutcome {
    pub fn classify(result: Result<String, LlmError>) -> Self {
        match result {
            Ok(text) => Self::Success(text),
            Err(LlmError::EmptyResponse { .. }) => Self::Success(String::new()),
            Err(LlmError::Overloaded { .. }) => Self::Retryable(TransientReason::Overloaded),
            Err(LlmError::RateLimited { .. }) => Self::Retryable(TransientReason::RateLimited),
            Err(LlmError::SafetyBlocked { .. }) => Self::SafetyBlocked,
            Err(LlmError::Http(err)) => Self::Fatal(sanitize_api_error(
                &LlmError::Http(err.without_url()).to_string(),
            )),
            Err(err) => Self::Fatal(sanitize_api_error(&err.to_string())),
        }
    }
}
