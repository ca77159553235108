//! Error types for the payment store.

use record_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Payment store unavailable: {0}")]
    StoreUnavailable(StoreError),

    #[error("Payment persistence error: {0}")]
    Persistence(StoreError),
}

impl From<StoreError> for PaymentError {
    fn from(e: StoreError) -> Self {
        if e.is_communication() {
            PaymentError::StoreUnavailable(e)
        } else {
            PaymentError::Persistence(e)
        }
    }
}
