//! Inventory Domain
//!
//! Synchronization and mutation engine for a single user's named inventory
//! items, persisted in a per-item document store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Engine    │  ← mutation protocol, derived local cache
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  ItemStore  │  ← store contract (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, ItemFields, ItemState
//! └─────────────┘
//! ```
//!
//! The cache is a derived projection of the store: every mutation is a
//! read-modify-write against the store followed by a full resync that
//! replaces the cache wholesale. See [`engine::InventoryEngine`] for the
//! consistency model and its accepted limitations.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{InventoryEngine, MongoItemStore};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("pantry");
//!
//! let mut engine = InventoryEngine::new(MongoItemStore::new(db));
//! engine.resync().await?;
//! engine.add("apple", None).await?;
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod models;
pub mod mongodb;
pub mod store;

// Re-export commonly used types
pub use engine::{InventoryEngine, filter};
pub use error::{InventoryError, InventoryResult};
pub use models::{Item, ItemFields, ItemState};
pub use mongodb::MongoItemStore;
pub use store::{InMemoryItemStore, ItemStore};
