//! Application State
//!
//! Shared state across all handlers.

use std::sync::Arc;

use parking_lot::RwLock;
use voice_cart_agent::{CommandDispatcher, ShoppingAgent};
use voice_cart_config::Settings;
use voice_cart_core::{Clock, ShoppingStore};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RwLock<Settings>>,
    /// Interpreter, dispatcher and recommendations over the shared store
    pub agent: Arc<ShoppingAgent>,
}

impl AppState {
    /// Create application state over a store, using the system clock
    pub fn new(config: Settings, store: Arc<dyn ShoppingStore>) -> Self {
        Self::with_agent(config, ShoppingAgent::new(store))
    }

    /// Create application state with a fixed clock source
    pub fn with_clock(config: Settings, store: Arc<dyn ShoppingStore>, clock: Arc<dyn Clock>) -> Self {
        Self::with_agent(config, ShoppingAgent::new(store).with_clock(clock))
    }

    pub fn with_agent(config: Settings, agent: ShoppingAgent) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            agent: Arc::new(agent),
        }
    }

    /// Get a snapshot of the current configuration
    pub fn get_config(&self) -> Settings {
        self.config.read().clone()
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        self.agent.dispatcher()
    }
}
