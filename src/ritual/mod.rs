//! The burn lifecycle: Idle -> Burning -> Cooling -> Idle.
//!
//! [`Incinerator`] is the only writer of the current state. Renderers watch it
//! through [`Incinerator::subscribe`].

use crate::acquirer::ResponseAcquirer;
use crate::error::RitualError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncineratorState {
    /// Accepting input.
    #[default]
    Idle,
    /// Submission in flight; input locked.
    Burning,
    /// Response on display; reset available.
    Cooling,
}

impl fmt::Display for IncineratorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Burning => f.write_str("burning"),
            Self::Cooling => f.write_str("cooling"),
        }
    }
}

/// What the presentation layer sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub state: IncineratorState,
    pub response: Option<String>,
}

pub type ResponseFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>>;

/// Seam between the lifecycle and whatever produces the reply.
pub trait ResponseSource: Send + Sync {
    fn respond(&self, text: String) -> ResponseFuture<'_>;
}

impl ResponseSource for ResponseAcquirer {
    fn respond(&self, text: String) -> ResponseFuture<'_> {
        Box::pin(async move { Ok(self.acquire(text).await) })
    }
}

pub struct Incinerator<S> {
    source: S,
    min_burn: Duration,
    ash_fallback: String,
    snapshot: watch::Sender<Snapshot>,
}

impl<S: ResponseSource> Incinerator<S> {
    pub fn new(source: S, min_burn: Duration, locale: &str) -> Self {
        let (snapshot, _) = watch::channel(Snapshot::default());
        Self {
            source,
            min_burn,
            ash_fallback: t!("ritual.ash_fallback", locale = locale).to_string(),
            snapshot,
        }
    }

    pub fn state(&self) -> IncineratorState {
        self.snapshot.borrow().state
    }

    pub fn response(&self) -> Option<String> {
        self.snapshot.borrow().response.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot.subscribe()
    }

    fn transition(&self, state: IncineratorState, response: Option<String>) {
        let from = self.state();
        self.snapshot.send_replace(Snapshot { state, response });
        tracing::debug!(%from, to = %state, "Incinerator state changed");
    }

    /// Burn `text` and return the response shown while cooling.
    ///
    /// Only valid from Idle with non-blank text. Resolves no sooner than the
    /// minimum burn time, however quickly the source answers.
    pub async fn submit(&mut self, text: String) -> Result<String, RitualError> {
        let state = self.state();
        if state != IncineratorState::Idle {
            return Err(RitualError::NotIdle { state });
        }
        if text.trim().is_empty() {
            return Err(RitualError::EmptySubmission);
        }

        self.transition(IncineratorState::Burning, None);

        let (result, ()) = tokio::join!(
            self.source.respond(text),
            tokio::time::sleep(self.min_burn)
        );

        let response = match result {
            Ok(response) if !response.trim().is_empty() => response,
            Ok(_) => {
                tracing::warn!("Response source returned blank text");
                self.ash_fallback.clone()
            }
            Err(err) => {
                tracing::error!("Response source failed: {err:#}");
                self.ash_fallback.clone()
            }
        };

        self.transition(IncineratorState::Cooling, Some(response.clone()));
        Ok(response)
    }

    /// Clear the response and accept input again. Only valid from Cooling.
    pub fn reset(&mut self) -> Result<(), RitualError> {
        let state = self.state();
        if state != IncineratorState::Cooling {
            return Err(RitualError::NotCooling { state });
        }
        self.transition(IncineratorState::Idle, None);
        Ok(())
    }
}
