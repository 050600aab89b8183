use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::InventoryResult;
use crate::models::{Item, ItemFields};

/// Contract over the external per-item document store
///
/// Each operation is a single round trip. The store offers no multi-key
/// transaction, no compare-and-swap, and no server-side increment; all
/// arithmetic happens client-side on a value read moments earlier. The
/// engine above this trait accepts the resulting lost-update race.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Read the document for a name, or None if absent
    async fn get(&self, name: &str) -> InventoryResult<Option<ItemFields>>;

    /// Read all documents (unordered)
    async fn list_all(&self) -> InventoryResult<Vec<Item>>;

    /// Write the document for a name, creating it if absent
    ///
    /// Full replace of the document's fields, not a partial patch.
    async fn upsert(&self, name: &str, fields: ItemFields) -> InventoryResult<()>;

    /// Delete the document for a name (idempotent, absent key is not an error)
    async fn delete(&self, name: &str) -> InventoryResult<()>;
}

/// In-memory implementation of ItemStore (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemStore {
    items: Arc<RwLock<HashMap<String, ItemFields>>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn get(&self, name: &str) -> InventoryResult<Option<ItemFields>> {
        let items = self.items.read().await;
        Ok(items.get(name).cloned())
    }

    async fn list_all(&self) -> InventoryResult<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .map(|(name, fields)| Item::new(name.clone(), fields.clone()))
            .collect())
    }

    async fn upsert(&self, name: &str, fields: ItemFields) -> InventoryResult<()> {
        let mut items = self.items.write().await;
        items.insert(name.to_string(), fields);
        Ok(())
    }

    async fn delete(&self, name: &str) -> InventoryResult<()> {
        let mut items = self.items.write().await;
        items.remove(name);
        Ok(())
    }
}
