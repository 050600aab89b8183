//! MongoDB implementation of ItemStore

use async_trait::async_trait;
use mongodb::{Collection, Database, bson::doc};
use tracing::instrument;

use crate::error::InventoryResult;
use crate::models::{Item, ItemFields};
use crate::store::ItemStore;

/// Default collection backing the inventory
pub const INVENTORY_COLLECTION: &str = "inventory";

/// MongoDB implementation of the ItemStore contract
///
/// Documents are keyed by item name (`_id`) with fields
/// `{ quantity, image }`. No secondary indexes, no schema versioning.
pub struct MongoItemStore {
    collection: Collection<Item>,
}

impl MongoItemStore {
    /// Create a new MongoItemStore on the `inventory` collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("pantry");
    /// let store = MongoItemStore::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, INVENTORY_COLLECTION)
    }

    /// Create a new MongoItemStore with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Item>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Item> {
        &self.collection
    }
}

#[async_trait]
impl ItemStore for MongoItemStore {
    #[instrument(skip(self))]
    async fn get(&self, name: &str) -> InventoryResult<Option<ItemFields>> {
        let item = self.collection.find_one(doc! { "_id": name }).await?;
        Ok(item.map(|i| i.fields()))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> InventoryResult<Vec<Item>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let items: Vec<Item> = cursor.try_collect().await?;
        Ok(items)
    }

    #[instrument(skip(self, fields), fields(quantity = fields.quantity))]
    async fn upsert(&self, name: &str, fields: ItemFields) -> InventoryResult<()> {
        let replacement = Item::new(name, fields);
        self.collection
            .replace_one(doc! { "_id": name }, &replacement)
            .upsert(true)
            .await?;

        tracing::info!(item_name = %name, "Item document written");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, name: &str) -> InventoryResult<()> {
        // Idempotent: a zero deleted_count (absent document) is not an error
        self.collection.delete_one(doc! { "_id": name }).await?;

        tracing::info!(item_name = %name, "Item document deleted");
        Ok(())
    }
}
