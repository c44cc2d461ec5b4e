//! Storage layer for the voice shopping assistant
//!
//! Provides storage for:
//! - The shopping list (insertion ordered)
//! - Purchase history (append-only)
//! - The product catalog (seeded or loaded from a JSON file)
//!
//! State lives for the lifetime of the process; nothing survives a restart.

pub mod catalog;
pub mod error;
pub mod memory;

pub use catalog::{load_catalog, load_catalog_or_default};
pub use error::PersistenceError;
pub use memory::InMemoryShoppingStore;

/// Build the store for a process
///
/// # Arguments
/// * `catalog_path` - optional JSON catalog replacing the built-in one
pub fn init(catalog_path: Option<&str>) -> Result<InMemoryShoppingStore, PersistenceError> {
    let catalog = load_catalog_or_default(catalog_path)?;
    tracing::info!(products = catalog.len(), "Shopping store initialized");
    Ok(InMemoryShoppingStore::with_catalog(catalog))
}
