//! Turns a burned thought into the text the user reads.
//!
//! [`ResponseAcquirer::acquire`] never fails: a missing key, an exhausted
//! retry budget, a safety block or any other provider failure all resolve to
//! one of the fixed strings in [`Messages`].

mod messages;
mod persona;

pub use messages::Messages;
pub use persona::SYSTEM_INSTRUCTION;

use crate::config::{AcquisitionConfig, Config};
use crate::llm::{
    GeminiProvider, ModelCallOutcome, Provider, ReliableProvider, RetryPolicy,
    build_provider_client_with_timeout,
};
use std::sync::Arc;
use std::time::Duration;

/// Builds a fresh provider for one acquisition, given the API key.
pub type ProviderFactory = Arc<dyn Fn(&str) -> Box<dyn Provider> + Send + Sync>;

pub struct ResponseAcquirer {
    credential: Option<String>,
    factory: ProviderFactory,
    policy: RetryPolicy,
    temperature: f64,
    expose_error_detail: bool,
    messages: Messages,
}

impl ResponseAcquirer {
    pub fn new(
        credential: Option<String>,
        factory: ProviderFactory,
        acquisition: &AcquisitionConfig,
        locale: &str,
    ) -> Self {
        Self {
            credential: credential.filter(|key| !key.trim().is_empty()),
            factory,
            policy: RetryPolicy {
                primary_model: acquisition.primary_model.clone(),
                fallback_model: acquisition.fallback_model.clone(),
                max_retries: acquisition.max_retries,
                backoff: Duration::from_millis(acquisition.retry_backoff_ms),
            },
            temperature: acquisition.temperature,
            expose_error_detail: acquisition.expose_error_detail,
            messages: Messages::new(locale),
        }
    }

    /// Gemini-backed acquirer sharing one connection pool across calls.
    pub fn from_config(config: &Config) -> Self {
        let acquisition = &config.acquisition;
        let client = build_provider_client_with_timeout(acquisition.request_timeout_secs);
        let base_url = acquisition.base_url.clone();
        let threshold = acquisition.safety_threshold;
        let max_output_tokens = acquisition.max_output_tokens;

        let factory: ProviderFactory = Arc::new(move |api_key: &str| -> Box<dyn Provider> {
            Box::new(
                GeminiProvider::with_client(api_key, client.clone())
                    .with_base_url(&base_url)
                    .with_safety_threshold(threshold)
                    .with_max_output_tokens(max_output_tokens),
            )
        });

        Self::new(
            config.credential().map(String::from),
            factory,
            acquisition,
            &config.effective_locale(),
        )
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Fetch a reply for `user_text`. The text is dropped once the call ends.
    pub async fn acquire(&self, user_text: String) -> String {
        let Some(api_key) = self.credential.as_deref() else {
            tracing::warn!("No API key configured, skipping model call");
            return self.messages.missing_credential();
        };

        tracing::info!(
            chars = user_text.chars().count(),
            model = self.policy.primary_model.as_str(),
            "Acquiring response"
        );

        let provider = (self.factory)(api_key);
        let reliable = ReliableProvider::new(provider, self.policy.clone());
        let outcome = reliable
            .generate(Some(SYSTEM_INSTRUCTION), &user_text, self.temperature)
            .await;
        drop(user_text);

        self.render(outcome)
    }

    fn render(&self, outcome: ModelCallOutcome) -> String {
        match outcome {
            ModelCallOutcome::Success(text) => {
                let text = text.trim();
                if text.is_empty() {
                    self.messages.empty_reply()
                } else {
                    text.to_string()
                }
            }
            ModelCallOutcome::Retryable(reason) => {
                tracing::warn!(%reason, "Retry budget exhausted");
                self.messages.busy()
            }
            ModelCallOutcome::SafetyBlocked => self.messages.filtered(),
            ModelCallOutcome::Fatal(detail) => self
                .messages
                .generic_error(self.expose_error_detail.then_some(detail.as_str())),
        }
    }
}
