//! Shopping Agent
//!
//! Features:
//! - Command dispatch against a pluggable shopping store
//! - Rule-based "you might also want" recommendations
//! - One-shot speech capture sessions
//! - End-to-end transcript handling for voice commands

pub mod capture;
pub mod dispatcher;
pub mod recommendation;
pub mod shopping_agent;

pub use capture::{CaptureEvent, CaptureSession, CaptureState, DEFAULT_LANGUAGE};
pub use dispatcher::{CommandDispatcher, DispatchOutcome};
pub use recommendation::{
    recommend, AlternativeRule, PurchasedTogetherRule, RecommendationContext,
    RecommendationEngine, RecommendationRule, SeasonalRule,
};
pub use shopping_agent::{CommandResponse, ShoppingAgent};

use thiserror::Error;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("A capture session is already listening")]
    CaptureInProgress,
}

impl AgentError {
    /// Whether the caller can fix the request
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::CaptureInProgress)
    }
}

impl From<voice_cart_core::Error> for AgentError {
    fn from(err: voice_cart_core::Error) -> Self {
        match err {
            voice_cart_core::Error::Store(msg) => AgentError::Store(msg),
            voice_cart_core::Error::InvalidInput(msg) => AgentError::InvalidInput(msg),
            voice_cart_core::Error::Capture(msg) => AgentError::Capture(msg),
        }
    }
}
