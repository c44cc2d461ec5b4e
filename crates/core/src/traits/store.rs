//! Store abstraction for the shopping list, purchase history and catalog

use async_trait::async_trait;

use crate::{Product, Result, ShoppingListEntry};

/// Shopping store interface
///
/// Implementations:
/// - `InMemoryShoppingStore` - process-local store (voice-cart-persistence)
///
/// The store is assumed single-writer. Readers get snapshots; callers never
/// hold on to them between operations.
#[async_trait]
pub trait ShoppingStore: Send + Sync + 'static {
    /// Current shopping list, in insertion order
    async fn get_list(&self) -> Result<Vec<ShoppingListEntry>>;

    /// Purchase history, oldest first
    async fn get_history(&self) -> Result<Vec<String>>;

    /// Product catalog
    async fn get_catalog(&self) -> Result<Vec<Product>>;

    /// Append an entry to the list
    async fn append_to_list(&self, entry: ShoppingListEntry) -> Result<()>;

    /// Drop every entry whose name equals `name` case-insensitively
    ///
    /// # Returns
    /// Number of entries removed
    async fn remove_from_list(&self, name: &str) -> Result<usize>;

    /// Append a name to the purchase history
    async fn append_history(&self, name: &str) -> Result<()>;

    /// Get backend name for logging
    fn backend_name(&self) -> &str;
}
