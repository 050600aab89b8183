use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    /// Rejected before any store access
    #[error("Invalid item name: {0}")]
    InvalidName(String),

    /// A read or write against the store failed (network, auth, quota).
    /// The engine does not retry; the local cache is left at its last
    /// successfully resynced value.
    #[error("Store error: {0}")]
    Store(String),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

impl From<mongodb::error::Error> for InventoryError {
    fn from(err: mongodb::error::Error) -> Self {
        InventoryError::Store(err.to_string())
    }
}
