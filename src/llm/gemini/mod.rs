//! Google Gemini `generateContent` provider.
//!
//! Each call is a single-turn request: the system instruction and the user's
//! text go out together, nothing is cached between calls.

use crate::error::LlmError;
use crate::llm::{
    build_provider_client, sanitize_api_error,
    traits::{Provider, ProviderFuture},
};
use reqwest::{Client, StatusCode};

mod types;
pub use types::HarmBlockThreshold;
use types::{
    ApiError, ApiErrorEnvelope, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, HarmCategory, Part, SafetySetting,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const PROVIDER_NAME: &str = "gemini";

/// Finish reasons that mean the provider refused to produce text.
const BLOCKING_FINISH_REASONS: [&str; 4] = ["SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST", "SPII"];

/// Gemini provider bound to one API key.
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    safety_threshold: HarmBlockThreshold,
    max_output_tokens: Option<u32>,
}

impl GeminiProvider {
    pub fn new(api_key: &str) -> Self {
        Self::with_client(api_key, build_provider_client())
    }

    /// Reuse an existing connection pool. The client holds no conversation state.
    pub fn with_client(api_key: &str, client: Client) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
            safety_threshold: HarmBlockThreshold::default(),
            max_output_tokens: None,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_safety_threshold(mut self, threshold: HarmBlockThreshold) -> Self {
        self.safety_threshold = threshold;
        self
    }

    /// Cap the reply length. `None` leaves it to the model.
    pub fn with_max_output_tokens(mut self, max_output_tokens: Option<u32>) -> Self {
        self.max_output_tokens = max_output_tokens.map(|cap| cap.max(1));
        self
    }

    fn model_name(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/{}:generateContent",
            self.base_url,
            Self::model_name(model)
        )
    }

    fn build_request(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        temperature: f64,
    ) -> GenerateContentRequest {
        let system_instruction = system_prompt.map(|sys| Content {
            role: None,
            parts: vec![Part {
                text: sys.to_string(),
            }],
        });

        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: message.to_string(),
                }],
            }],
            system_instruction,
            generation_config: GenerationConfig {
                temperature,
                max_output_tokens: self.max_output_tokens,
            },
            safety_settings: HarmCategory::ALL
                .into_iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: self.safety_threshold,
                })
                .collect(),
        }
    }

    fn classify_api_error(http_status: u16, error: &ApiError) -> LlmError {
        let status = error.code.unwrap_or(http_status);
        match (status, error.status.as_deref()) {
            (503, _) | (_, Some("UNAVAILABLE")) => LlmError::Overloaded {
                provider: PROVIDER_NAME.into(),
                status,
            },
            (429, _) | (_, Some("RESOURCE_EXHAUSTED")) => LlmError::RateLimited {
                provider: PROVIDER_NAME.into(),
                status,
            },
            _ => LlmError::Request {
                provider: PROVIDER_NAME.into(),
                message: format!(
                    "Gemini API error ({status}): {}",
                    sanitize_api_error(&error.message)
                ),
            },
        }
    }

    fn classify_failure(status: StatusCode, body: &str) -> LlmError {
        let error = serde_json::from_str::<ApiErrorEnvelope>(body)
            .map(|envelope| envelope.error)
            .unwrap_or_else(|_| ApiError {
                code: None,
                message: body.to_string(),
                status: None,
            });
        Self::classify_api_error(status.as_u16(), &error)
    }

    fn extract_text(result: &GenerateContentResponse) -> Result<String, LlmError> {
        if let Some(error) = result.error.as_ref() {
            return Err(Self::classify_api_error(200, error));
        }

        let Some(candidate) = result.candidates.first() else {
            if let Some(reason) = result
                .prompt_feedback
                .as_ref()
                .and_then(|feedback| feedback.block_reason.clone())
            {
                return Err(LlmError::SafetyBlocked {
                    provider: PROVIDER_NAME.into(),
                    reason,
                });
            }
            return Err(LlmError::EmptyResponse {
                provider: PROVIDER_NAME.into(),
            });
        };

        if let Some(reason) = candidate.finish_reason.as_deref()
            && BLOCKING_FINISH_REASONS.contains(&reason)
        {
            return Err(LlmError::SafetyBlocked {
                provider: PROVIDER_NAME.into(),
                reason: reason.to_string(),
            });
        }

        // Parts are fragments of one reply, so they join without a separator.
        let out: String = candidate
            .content
            .iter()
            .flat_map(|content| content.parts.iter())
            .filter(|part| !part.thought)
            .filter_map(|part| part.text.as_deref())
            .collect();

        let text = out.trim();
        if text.is_empty() {
            return Err(LlmError::EmptyResponse {
                provider: PROVIDER_NAME.into(),
            });
        }

        Ok(text.to_string())
    }

    async fn call_api(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        tracing::debug!(model, "Sending Gemini generateContent request");

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", self.api_key.as_str())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_failure(status, &body));
        }

        let result: GenerateContentResponse = response.json().await?;
        if let Some(version) = result.model_version.as_deref() {
            tracing::debug!(model, version, "Gemini responded");
        }
        Ok(result)
    }
}

impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn chat_with_system<'a>(
        &'a self,
        system_prompt: Option<&'a str>,
        message: &'a str,
        model: &'a str,
        temperature: f64,
    ) -> ProviderFuture<'a> {
        Box::pin(async move {
            if self.api_key.trim().is_empty() {
                return Err(LlmError::MissingCredential {
                    provider: PROVIDER_NAME.into(),
                });
            }
            let request = self.build_request(system_prompt, message, temperature);
            let result = self.call_api(model, &request).await?;
            Self::extract_text(&result)
        })
    }
}
