use crate::ritual::IncineratorState;
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for the incinerator.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; the binary uses `anyhow::Result` for
/// ad-hoc context chains.
#[derive(Debug, Error)]
pub enum IncineratorError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── LLM / Provider ──────────────────────────────────────────────────
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    // ── Ritual lifecycle ────────────────────────────────────────────────
    #[error("ritual: {0}")]
    Ritual(#[from] RitualError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── LLM / Provider errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("provider {provider} has no API key configured")]
    MissingCredential { provider: String },

    #[error("provider {provider} overloaded ({status})")]
    Overloaded { provider: String, status: u16 },

    #[error("provider {provider} rate-limited ({status})")]
    RateLimited { provider: String, status: u16 },

    #[error("provider {provider} blocked the content: {reason}")]
    SafetyBlocked { provider: String, reason: String },

    #[error("provider {provider} returned no text")]
    EmptyResponse { provider: String },

    #[error("provider {provider} request failed: {message}")]
    Request { provider: String, message: String },

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
}

// ─── Ritual errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RitualError {
    #[error("nothing to burn: submission is blank")]
    EmptySubmission,

    #[error("cannot submit while {state}")]
    NotIdle { state: IncineratorState },

    #[error("cannot reset while {state}")]
    NotCooling { state: IncineratorState },
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, IncineratorError>;
