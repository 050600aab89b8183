//! Database library providing the MongoDB connector backing the inventory
//! document store
//!
//! # Features
//!
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("pantry");
//! let collection = db.collection::<Document>("inventory");
//! ```

pub mod common;
pub mod mongodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult, RetryConfig, retry, retry_with_backoff};
