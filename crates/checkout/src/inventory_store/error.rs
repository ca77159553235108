//! Error types for the inventory store.

use crate::model::ProductId;
use record_store::StoreError;
use thiserror::Error;

/// Errors that can occur during inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A product with this id is already stocked.
    #[error("Product already stocked: {0}")]
    DuplicateProduct(ProductId),

    /// The inventory store task is no longer running.
    #[error("Inventory store unavailable: {0}")]
    StoreUnavailable(StoreError),

    /// Reading or writing the inventory file failed.
    #[error("Inventory persistence error: {0}")]
    Persistence(StoreError),

    /// The store answered a query or action with a result of the wrong kind.
    #[error("Unexpected inventory response: {0}")]
    UnexpectedResponse(String),
}

impl From<StoreError> for InventoryError {
    fn from(e: StoreError) -> Self {
        match e {
            // Errors raised by the record hooks come back boxed.
            StoreError::Record(inner) => match inner.downcast::<InventoryError>() {
                Ok(own) => *own,
                Err(other) => InventoryError::Persistence(StoreError::Record(other)),
            },
            e if e.is_communication() => InventoryError::StoreUnavailable(e),
            e => InventoryError::Persistence(e),
        }
    }
}
