//! Inventory engine - mutation protocol and derived local cache

use std::sync::Arc;
use tracing::instrument;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{Item, ItemFields, ItemState};
use crate::store::ItemStore;

/// Inventory synchronization and mutation engine
///
/// Owns the add / decrement-or-remove / remove protocol against an
/// [`ItemStore`] and the local cache it exposes to the calling layer. The
/// cache is never the source of truth: it is replaced wholesale by a full
/// resync after every mutation, and is allowed to be transiently stale
/// between a write and the resync that follows it.
///
/// The engine issues operations sequentially relative to itself (mutators
/// take `&mut self`, one logical writer per instance), but the store is
/// shared and may be concurrently mutated by other client instances. Each
/// mutation is a read-then-write with no locking, no concurrency token,
/// and no retry, so a lost-update race between two clients is possible;
/// that is accepted behavior, not a bug to silently fix.
pub struct InventoryEngine<S: ItemStore> {
    store: Arc<S>,
    cache: Vec<Item>,
}

impl<S: ItemStore> InventoryEngine<S> {
    /// Create an engine with an empty cache
    ///
    /// Call [`resync`](Self::resync) once for the initial load.
    pub fn new(store: S) -> Self {
        Self::with_shared(Arc::new(store))
    }

    /// Create an engine over an already-shared store
    ///
    /// Several engine instances may point at the same store (a second
    /// tab/user); nothing coordinates their writes.
    pub fn with_shared(store: Arc<S>) -> Self {
        Self {
            store,
            cache: Vec::new(),
        }
    }

    /// The last successfully resynced snapshot
    ///
    /// Treat a resync as replacing this view, not patching it; ordering
    /// comes from the store and must not be relied upon.
    pub fn cached(&self) -> &[Item] {
        &self.cache
    }

    /// Re-read all documents and replace the cache wholesale
    ///
    /// On a read failure the error propagates and the previous cache is
    /// left untouched (never partially overwritten).
    #[instrument(skip(self))]
    pub async fn resync(&mut self) -> InventoryResult<&[Item]> {
        let items = self.store.list_all().await?;
        self.cache = items;
        Ok(&self.cache)
    }

    /// Add one unit of `name`, creating the item at quantity 1 if absent
    ///
    /// The supplied image overwrites whatever the document held before:
    /// writes are full replaces, so adding to an existing item without a
    /// picture clears any previously stored picture.
    ///
    /// Fails with [`InventoryError::InvalidName`] before any store access
    /// when the trimmed name is empty. The raw (untrimmed) name is the
    /// store key.
    #[instrument(skip(self, image), fields(has_image = image.is_some()))]
    pub async fn add(&mut self, name: &str, image: Option<String>) -> InventoryResult<&[Item]> {
        if name.trim().is_empty() {
            return Err(InventoryError::InvalidName(
                "name must not be empty or whitespace-only".to_string(),
            ));
        }

        let fields = match ItemState::from(self.store.get(name).await?) {
            ItemState::Absent => ItemFields { quantity: 1, image },
            ItemState::Present { quantity, .. } => ItemFields {
                quantity: quantity + 1,
                image,
            },
        };

        self.store.upsert(name, fields).await?;
        tracing::info!(item_name = %name, "Item added");

        self.resync().await
    }

    /// Decrement `name` by one, deleting the document at quantity 1
    ///
    /// Quantity zero is never persisted. An absent name is a no-op
    /// (already zero), not an error; the resync still runs.
    #[instrument(skip(self))]
    pub async fn decrement_or_remove(&mut self, name: &str) -> InventoryResult<&[Item]> {
        match ItemState::from(self.store.get(name).await?) {
            ItemState::Absent => {}
            ItemState::Present { quantity, image } if quantity > 1 => {
                // Stored image is preserved across a decrement
                self.store
                    .upsert(
                        name,
                        ItemFields {
                            quantity: quantity - 1,
                            image,
                        },
                    )
                    .await?;
                tracing::info!(item_name = %name, "Item decremented");
            }
            ItemState::Present { .. } => {
                self.store.delete(name).await?;
                tracing::info!(item_name = %name, "Item removed at quantity 1");
            }
        }

        self.resync().await
    }

    /// Delete the document for `name` regardless of quantity
    ///
    /// Idempotent: removing an absent name is not an error.
    #[instrument(skip(self))]
    pub async fn remove(&mut self, name: &str) -> InventoryResult<&[Item]> {
        self.store.delete(name).await?;
        tracing::info!(item_name = %name, "Item removed");

        self.resync().await
    }
}

/// Case-insensitive substring filter over a cache snapshot
///
/// Pure and synchronous: never touches the store. Returns a restartable
/// (cloneable) view over the snapshot, order-preserving with respect to
/// it. An empty term matches every entry.
pub fn filter<'a>(
    snapshot: &'a [Item],
    term: &str,
) -> impl Iterator<Item = &'a Item> + Clone + 'a {
    let needle = term.to_lowercase();
    snapshot
        .iter()
        .filter(move |item| item.name.to_lowercase().contains(&needle))
}
