use crate::llm::HarmBlockThreshold;
use crate::llm::gemini::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Unset means "follow `LANG`", falling back to Korean.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default)]
    pub acquisition: AcquisitionConfig,

    #[serde(default)]
    pub ritual: RitualConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            api_key: None,
            locale: None,
            acquisition: AcquisitionConfig::default(),
            ritual: RitualConfig::default(),
        }
    }
}

/// How a reply is fetched from the model service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionConfig {
    #[serde(default = "default_primary_model")]
    pub primary_model: String,
    /// Cheaper model for the retry. Written as `""` when disabled, which
    /// retries the primary.
    #[serde(default = "default_fallback_model", with = "optional_model")]
    pub fallback_model: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    #[serde(default)]
    pub safety_threshold: HarmBlockThreshold,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Output cap sent to the model. Unset by default: on thinking models the
    /// cap also covers thinking tokens and can starve the visible reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    /// Append the sanitized failure detail to the generic error message.
    #[serde(default)]
    pub expose_error_detail: bool,
}

fn default_primary_model() -> String {
    "gemini-2.5-flash".into()
}

#[allow(clippy::unnecessary_wraps)]
fn default_fallback_model() -> Option<String> {
    Some("gemini-2.5-flash-lite".into())
}

fn default_temperature() -> f64 {
    0.8
}

fn default_max_retries() -> u32 {
    1
}

fn default_retry_backoff_ms() -> u64 {
    1500
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_request_timeout_secs() -> u64 {
    60
}

/// `Option<String>` stored as a plain string, `""` meaning `None`.
mod optional_model {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        model: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(model.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let model = raw.trim();
        Ok((!model.is_empty()).then(|| model.to_string()))
    }
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            primary_model: default_primary_model(),
            fallback_model: default_fallback_model(),
            temperature: default_temperature(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            safety_threshold: HarmBlockThreshold::default(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            max_output_tokens: None,
            expose_error_detail: false,
        }
    }
}

/// Timing of the burn itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RitualConfig {
    /// The fire burns at least this long, however fast the reply arrives.
    #[serde(default = "default_min_burn_ms")]
    pub min_burn_ms: u64,
}

fn default_min_burn_ms() -> u64 {
    2500
}

impl Default for RitualConfig {
    fn default() -> Self {
        Self {
            min_burn_ms: default_min_burn_ms(),
        }
    }
}
