//! End-to-end voice command handling
//!
//! transcript → [`CommandParser`] → [`CommandDispatcher`] → recommendation
//! refresh for list-mutating intents.

use std::sync::Arc;

use serde::Serialize;
use voice_cart_core::{Clock, Command, Product, ShoppingListEntry, ShoppingStore, SystemClock};
use voice_cart_text_processing::CommandParser;

use crate::capture::CaptureSession;
use crate::dispatcher::{CommandDispatcher, DispatchOutcome};
use crate::recommendation::RecommendationEngine;
use crate::AgentError;

/// Everything a client needs to render the result of one voice command
#[derive(Debug, Clone, Serialize)]
pub struct CommandResponse {
    pub command: Command,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<ShoppingListEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Product>>,
}

/// Shopping assistant: interpreter, dispatcher and recommendations over one store
pub struct ShoppingAgent {
    parser: CommandParser,
    dispatcher: CommandDispatcher,
    recommender: RecommendationEngine,
    clock: Arc<dyn Clock>,
    capture: Option<CaptureSession>,
}

impl ShoppingAgent {
    pub fn new(store: Arc<dyn ShoppingStore>) -> Self {
        Self {
            parser: CommandParser::new(),
            dispatcher: CommandDispatcher::new(store),
            recommender: RecommendationEngine::default(),
            clock: Arc::new(SystemClock),
            capture: None,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_capture(mut self, capture: CaptureSession) -> Self {
        self.capture = Some(capture);
        self
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    pub fn capture(&self) -> Option<&CaptureSession> {
        self.capture.as_ref()
    }

    /// Interpret and apply one transcript
    pub async fn handle_transcript(&self, transcript: &str) -> Result<CommandResponse, AgentError> {
        let command = self.parser.parse(transcript);
        let outcome = self.dispatcher.dispatch(&command).await?;

        let mut response = CommandResponse {
            command,
            outcome: outcome.label(),
            message: None,
            list: None,
            recommendations: None,
            results: None,
        };

        match outcome {
            DispatchOutcome::Searched { results } => response.results = Some(results),
            DispatchOutcome::NotUnderstood => {
                response.message = Some("Command not understood".to_string())
            }
            DispatchOutcome::Skipped { .. } => {
                response.message = Some("No item named in command".to_string())
            }
            DispatchOutcome::Added { .. } | DispatchOutcome::Removed { .. } => {}
        }

        if response.command.intent.mutates_list() {
            response.list = Some(self.list().await?);
            response.recommendations = Some(self.recommendations().await?);
        }

        Ok(response)
    }

    /// Capture one utterance and handle it
    ///
    /// # Returns
    /// `None` when the capture ended without a transcript
    pub async fn listen_once(&self) -> Result<Option<CommandResponse>, AgentError> {
        let capture = self
            .capture
            .as_ref()
            .ok_or_else(|| AgentError::Capture("no transcript source configured".to_string()))?;

        match capture.capture().await? {
            Some(transcript) => Ok(Some(self.handle_transcript(&transcript).await?)),
            None => Ok(None),
        }
    }

    /// Current shopping list
    pub async fn list(&self) -> Result<Vec<ShoppingListEntry>, AgentError> {
        Ok(self.dispatcher.store().get_list().await?)
    }

    /// Suggestions for the current list, history and month
    pub async fn recommendations(&self) -> Result<Vec<String>, AgentError> {
        let store = self.dispatcher.store();
        let history = store.get_history().await?;
        let list = store.get_list().await?;
        let month = self.clock.current_month();

        let suggestions = self.recommender.recommend(&history, &list, month);
        tracing::debug!(month, count = suggestions.len(), "Computed recommendations");
        Ok(suggestions)
    }
}

impl std::fmt::Debug for ShoppingAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShoppingAgent")
            .field("dispatcher", &self.dispatcher)
            .field("recommender", &self.recommender)
            .field("capture", &self.capture)
            .finish()
    }
}
