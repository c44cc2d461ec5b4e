//! Command dispatch against the shopping store
//!
//! The only place that writes to the store. Every store failure is logged
//! here and handed back to the caller unchanged; nothing is retried.

use std::sync::Arc;

use serde::Serialize;
use voice_cart_core::{
    sort_products, Command, Intent, Product, SearchQuery, ShoppingListEntry, ShoppingStore,
    SortOrder,
};

use crate::AgentError;

/// Result of dispatching one command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// An entry was appended to the list
    Added { entry: ShoppingListEntry },
    /// Entries matching the name were dropped (possibly none)
    Removed { name: String, count: usize },
    /// Catalog products matching the query
    Searched { results: Vec<Product> },
    /// ADD or REMOVE without an item; nothing was touched
    Skipped { intent: Intent },
    /// No intent recognized
    NotUnderstood,
}

impl DispatchOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Added { .. } => "added",
            Self::Removed { .. } => "removed",
            Self::Searched { .. } => "searched",
            Self::Skipped { .. } => "skipped",
            Self::NotUnderstood => "not_understood",
        }
    }
}

/// Applies commands and direct list operations to a [`ShoppingStore`]
#[derive(Clone)]
pub struct CommandDispatcher {
    store: Arc<dyn ShoppingStore>,
}

impl CommandDispatcher {
    pub fn new(store: Arc<dyn ShoppingStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ShoppingStore> {
        &self.store
    }

    /// Dispatch an interpreted command
    pub async fn dispatch(&self, command: &Command) -> Result<DispatchOutcome, AgentError> {
        let outcome = match command.intent {
            Intent::Add | Intent::Remove if !command.has_item() => {
                tracing::debug!(intent = %command.intent, "No item in command, skipping");
                DispatchOutcome::Skipped {
                    intent: command.intent,
                }
            }
            Intent::Add => DispatchOutcome::Added {
                entry: self.add_item(&command.item, command.quantity).await?,
            },
            Intent::Remove => DispatchOutcome::Removed {
                count: self.remove_item(&command.item).await?,
                name: command.item.clone(),
            },
            Intent::Search => DispatchOutcome::Searched {
                results: self
                    .search(&SearchQuery::from_command(command), command.sort)
                    .await?,
            },
            Intent::Unknown => {
                tracing::info!(item = %command.item, "Command not understood");
                DispatchOutcome::NotUnderstood
            }
        };
        Ok(outcome)
    }

    /// Append an item to the list and record it in the purchase history
    pub async fn add_item(
        &self,
        name: &str,
        quantity: u64,
    ) -> Result<ShoppingListEntry, AgentError> {
        if name.trim().is_empty() {
            tracing::warn!("Rejected add without item name");
            return Err(AgentError::InvalidInput("Item name required".to_string()));
        }

        let entry = ShoppingListEntry::new(name, quantity);
        self.store
            .append_to_list(entry.clone())
            .await
            .map_err(|e| self.log_failure("append_to_list", e))?;
        self.store
            .append_history(&name.to_lowercase())
            .await
            .map_err(|e| self.log_failure("append_history", e))?;

        tracing::info!(
            item = %entry.name,
            quantity = entry.quantity,
            category = %entry.category,
            "Added item to list"
        );
        Ok(entry)
    }

    /// Drop every list entry with this name (case-insensitive)
    pub async fn remove_item(&self, name: &str) -> Result<usize, AgentError> {
        if name.trim().is_empty() {
            tracing::warn!("Rejected remove without item name");
            return Err(AgentError::InvalidInput("Item name required".to_string()));
        }

        let count = self
            .store
            .remove_from_list(name)
            .await
            .map_err(|e| self.log_failure("remove_from_list", e))?;

        tracing::info!(item = %name, removed = count, "Removed item from list");
        Ok(count)
    }

    /// Filter the catalog, brands rendered for display
    pub async fn search(
        &self,
        query: &SearchQuery,
        sort: Option<SortOrder>,
    ) -> Result<Vec<Product>, AgentError> {
        let catalog = self
            .store
            .get_catalog()
            .await
            .map_err(|e| self.log_failure("get_catalog", e))?;

        let mut results: Vec<Product> = query
            .apply(&catalog)
            .iter()
            .map(Product::for_display)
            .collect();
        if let Some(order) = sort {
            sort_products(&mut results, order);
        }

        tracing::info!(
            item = ?query.item,
            brand = ?query.brand,
            max_price = ?query.max_price,
            results = results.len(),
            "Searched catalog"
        );
        Ok(results)
    }

    fn log_failure(&self, operation: &str, error: voice_cart_core::Error) -> AgentError {
        tracing::error!(
            backend = self.store.backend_name(),
            operation,
            error = %error,
            "Store operation failed"
        );
        error.into()
    }
}

impl std::fmt::Debug for CommandDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDispatcher")
            .field("store", &self.store.backend_name())
            .finish()
    }
}
