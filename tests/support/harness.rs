#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use incinerator::Config;
use incinerator::ritual::{ResponseFuture, ResponseSource};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const PRIMARY: &str = "gemini-2.5-flash";
pub const FALLBACK: &str = "gemini-2.5-flash-lite";

pub fn endpoint(model: &str) -> String {
    format!("/v1beta/models/{model}:generateContent")
}

/// Config pointed at `server` with a short backoff.
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.api_key = Some("test-key".into());
    config.locale = Some("en".into());
    config.acquisition.base_url = server.uri();
    config.acquisition.retry_backoff_ms = 10;
    config.ritual.min_burn_ms = 20;
    config
}

pub fn text_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

pub fn overloaded() -> Value {
    json!({
        "error": {
            "code": 503,
            "message": "The model is overloaded. Please try again later.",
            "status": "UNAVAILABLE"
        }
    })
}

pub fn safety_blocked() -> Value {
    json!({
        "candidates": [{ "finishReason": "SAFETY" }]
    })
}

/// Response source that replays a script and counts calls.
pub struct ScriptedSource {
    replies: Mutex<VecDeque<anyhow::Result<String>>>,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn new(replies: Vec<anyhow::Result<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Call counter that stays readable after the source is moved.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl ResponseSource for ScriptedSource {
    fn respond(&self, _text: String) -> ResponseFuture<'_> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("the last ember".into()))
        })
    }
}
