// ── Infrastructure ───────────────────────────────────────────────────────────
pub mod http_client;
pub mod outcome;
pub mod scrub;
pub mod traits;

// ── Decorator layers ────────────────────────────────────────────────────────
pub mod reliable;

// ── Provider implementations ────────────────────────────────────────────────
pub mod gemini;

// ── Infrastructure re-exports ───────────────────────────────────────────────
pub use http_client::{build_provider_client, build_provider_client_with_timeout};
pub use outcome::{ModelCallOutcome, TransientReason};
pub use scrub::{sanitize_api_error, scrub_secret_patterns};
pub use traits::Provider;

// ── Provider + decorator re-exports ─────────────────────────────────────────
pub use gemini::{GeminiProvider, HarmBlockThreshold};
pub use reliable::{MAX_RETRIES, ReliableProvider, RetryPolicy};
