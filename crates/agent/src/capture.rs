//! One-shot speech capture session
//!
//! Wraps a [`TranscriptSource`] with the capture lifecycle:
//!
//! ```text
//! Idle ──capture()──► Listening ──result / no result / error──► Ended
//! ```
//!
//! Exactly one of `ResultReceived` or `EndedWithoutResult` is broadcast per
//! capture, followed by `Ended`. Only one capture may be listening at a time;
//! a second call while listening fails with [`AgentError::CaptureInProgress`].

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use voice_cart_core::TranscriptSource;

use crate::AgentError;

/// Default recognition language
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Capture session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// No capture has run yet
    Idle,
    /// Waiting for the source to produce a transcript
    Listening,
    /// Last capture finished
    Ended,
}

/// Capture session events
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureEvent {
    /// Capture started
    Started { language: String },
    /// Source recognized speech
    ResultReceived { transcript: String },
    /// Source finished without recognizing anything, or failed
    EndedWithoutResult,
    /// Capture finished
    Ended,
}

/// Capture lifecycle around a transcript source
pub struct CaptureSession {
    source: Arc<dyn TranscriptSource>,
    language: String,
    state: Arc<RwLock<CaptureState>>,
    event_tx: broadcast::Sender<CaptureEvent>,
}

/// Returns the session to `Ended` if a capture future is dropped mid-listen
struct ListeningGuard {
    state: Arc<RwLock<CaptureState>>,
}

impl Drop for ListeningGuard {
    fn drop(&mut self) {
        *self.state.write() = CaptureState::Ended;
    }
}

impl CaptureSession {
    pub fn new(source: Arc<dyn TranscriptSource>, language: impl Into<String>) -> Self {
        let (event_tx, _) = broadcast::channel(16);
        Self {
            source,
            language: language.into(),
            state: Arc::new(RwLock::new(CaptureState::Idle)),
            event_tx,
        }
    }

    /// Session using [`DEFAULT_LANGUAGE`]
    pub fn with_default_language(source: Arc<dyn TranscriptSource>) -> Self {
        Self::new(source, DEFAULT_LANGUAGE)
    }

    /// Capture a single utterance
    ///
    /// # Returns
    /// `Some(transcript)` when speech was recognized, `None` otherwise
    pub async fn capture(&self) -> Result<Option<String>, AgentError> {
        {
            let mut state = self.state.write();
            if *state == CaptureState::Listening {
                tracing::warn!(source = self.source.name(), "Capture already in progress");
                return Err(AgentError::CaptureInProgress);
            }
            *state = CaptureState::Listening;
        }
        let _guard = ListeningGuard {
            state: self.state.clone(),
        };

        tracing::debug!(source = self.source.name(), language = %self.language, "Capture started");
        self.emit(CaptureEvent::Started {
            language: self.language.clone(),
        });

        let result = self.source.capture(&self.language).await;

        match &result {
            Ok(Some(transcript)) => {
                tracing::info!(transcript = %transcript, "Transcript received");
                self.emit(CaptureEvent::ResultReceived {
                    transcript: transcript.clone(),
                });
            }
            Ok(None) => {
                tracing::debug!("Capture ended without result");
                self.emit(CaptureEvent::EndedWithoutResult);
            }
            Err(e) => {
                tracing::warn!(source = self.source.name(), error = %e, "Capture failed");
                self.emit(CaptureEvent::EndedWithoutResult);
            }
        }

        *self.state.write() = CaptureState::Ended;
        self.emit(CaptureEvent::Ended);

        result.map_err(AgentError::from)
    }

    /// Subscribe to capture events
    pub fn subscribe(&self) -> broadcast::Receiver<CaptureEvent> {
        self.event_tx.subscribe()
    }

    /// Get current state
    pub fn state(&self) -> CaptureState {
        *self.state.read()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    fn emit(&self, event: CaptureEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}

impl std::fmt::Debug for CaptureSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSession")
            .field("source", &self.source.name())
            .field("language", &self.language)
            .field("state", &self.state())
            .finish()
    }
}
