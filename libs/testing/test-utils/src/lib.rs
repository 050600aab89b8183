//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure:
//! - `TestMongo`: MongoDB container with automatic cleanup
//! - `TestDataBuilder`: Deterministic test data generation
//! - `assertions`: Custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestMongo, TestDataBuilder};
//!
//! # async fn example() {
//! let mongo = TestMongo::new().await;
//! let builder = TestDataBuilder::from_test_name("my_test");
//!
//! let name = builder.item_name("apple");
//! # }
//! ```

mod mongo;

pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data, while keeping
/// names from different tests distinct even against a shared database.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test
    /// data.
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique item name for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.item_name("apple");
    /// // Returns: "test-item-12345-apple"
    /// ```
    pub fn item_name(&self, suffix: &str) -> String {
        format!("test-item-{}-{}", self.seed, suffix)
    }

    /// Generate a unique image payload for testing
    pub fn image(&self, label: &str) -> String {
        format!("data:image/png;base64,{}-{}", self.seed, label)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that an optional value is None
    pub fn assert_none<T: std::fmt::Debug>(value: Option<T>, context: &str) {
        if let Some(v) = value {
            panic!("{}: expected None, got Some({:?})", context, v);
        }
    }
}
