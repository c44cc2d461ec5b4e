//! Process-local shopping store

use async_trait::async_trait;
use parking_lot::RwLock;

use voice_cart_core::{default_catalog, Product, Result, ShoppingListEntry, ShoppingStore};

/// In-memory store backed by `parking_lot` locks
///
/// The catalog is fixed at construction; list and history are mutated
/// through the [`ShoppingStore`] write operations only.
#[derive(Debug)]
pub struct InMemoryShoppingStore {
    list: RwLock<Vec<ShoppingListEntry>>,
    history: RwLock<Vec<String>>,
    catalog: Vec<Product>,
}

impl Default for InMemoryShoppingStore {
    fn default() -> Self {
        Self::with_catalog(default_catalog())
    }
}

impl InMemoryShoppingStore {
    /// Store seeded with the built-in catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Vec<Product>) -> Self {
        Self {
            list: RwLock::new(Vec::new()),
            history: RwLock::new(Vec::new()),
            catalog,
        }
    }
}

#[async_trait]
impl ShoppingStore for InMemoryShoppingStore {
    async fn get_list(&self) -> Result<Vec<ShoppingListEntry>> {
        Ok(self.list.read().clone())
    }

    async fn get_history(&self) -> Result<Vec<String>> {
        Ok(self.history.read().clone())
    }

    async fn get_catalog(&self) -> Result<Vec<Product>> {
        Ok(self.catalog.clone())
    }

    async fn append_to_list(&self, entry: ShoppingListEntry) -> Result<()> {
        self.list.write().push(entry);
        Ok(())
    }

    async fn remove_from_list(&self, name: &str) -> Result<usize> {
        let mut list = self.list.write();
        let before = list.len();
        list.retain(|entry| !entry.is_named(name));
        Ok(before - list.len())
    }

    async fn append_history(&self, name: &str) -> Result<()> {
        self.history.write().push(name.to_string());
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "in-memory"
    }
}
