use super::outcome::ModelCallOutcome;
use super::traits::Provider;
use std::time::Duration;

/// Hard cap on extra attempts after the primary one.
pub const MAX_RETRIES: u32 = 1;

/// Which models to try and how long to wait between them.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub primary_model: String,
    /// Cheaper model used for the retry. `None` retries the primary.
    pub fallback_model: Option<String>,
    pub max_retries: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Ordered list of models, one entry per attempt.
    pub fn attempt_plan(&self) -> Vec<&str> {
        let retry_model = self
            .fallback_model
            .as_deref()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or(self.primary_model.as_str());

        std::iter::once(self.primary_model.as_str())
            .chain(std::iter::repeat_n(
                retry_model,
                self.max_retries.min(MAX_RETRIES) as usize,
            ))
            .collect()
    }
}

/// Provider wrapper with bounded retry + model fallback.
///
/// Only overload and rate-limit outcomes are retried, after a fixed delay.
/// Safety blocks and every other failure end the loop immediately.
pub struct ReliableProvider {
    provider: Box<dyn Provider>,
    policy: RetryPolicy,
}

impl ReliableProvider {
    pub fn new(provider: Box<dyn Provider>, policy: RetryPolicy) -> Self {
        if policy.max_retries > MAX_RETRIES {
            tracing::warn!(
                requested = policy.max_retries,
                cap = MAX_RETRIES,
                "Retry budget capped"
            );
        }
        Self { provider, policy }
    }

    pub async fn generate(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        temperature: f64,
    ) -> ModelCallOutcome {
        let plan = self.policy.attempt_plan();
        let provider_name = self.provider.name();
        let mut last = ModelCallOutcome::Fatal("no attempts planned".into());

        for (attempt, &model) in plan.iter().enumerate() {
            let outcome = ModelCallOutcome::classify(
                self.provider
                    .chat_with_system(system_prompt, message, model, temperature)
                    .await,
            );

            match &outcome {
                ModelCallOutcome::Success(_) => {
                    if attempt > 0 {
                        tracing::info!(
                            provider = provider_name,
                            model,
                            attempt = attempt + 1,
                            "Provider recovered after retry"
                        );
                    }
                    return outcome;
                }
                ModelCallOutcome::Retryable(reason) => {
                    tracing::warn!(
                        provider = provider_name,
                        model,
                        attempt = attempt + 1,
                        attempts = plan.len(),
                        %reason,
                        "Transient provider failure"
                    );
                    if attempt + 1 < plan.len() {
                        tokio::time::sleep(self.policy.backoff).await;
                    }
                    last = outcome;
                }
                ModelCallOutcome::SafetyBlocked => {
                    tracing::info!(
                        provider = provider_name,
                        model,
                        "Content blocked by safety filter"
                    );
                    return outcome;
                }
                ModelCallOutcome::Fatal(detail) => {
                    tracing::warn!(
                        provider = provider_name,
                        model,
                        detail = detail.as_str(),
                        "Non-retryable provider failure"
                    );
                    return outcome;
                }
            }
        }

        last
    }
}
