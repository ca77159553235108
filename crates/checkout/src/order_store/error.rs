//! Error types for the order store.

use record_store::StoreError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The order store task is no longer running.
    #[error("Order store unavailable: {0}")]
    StoreUnavailable(StoreError),

    /// Reading or writing the orders file failed.
    #[error("Order persistence error: {0}")]
    Persistence(StoreError),
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        if e.is_communication() {
            OrderError::StoreUnavailable(e)
        } else {
            OrderError::Persistence(e)
        }
    }
}
