//! Error type for checkout orchestration.

use super::config::ConfigError;
use crate::inventory_store::InventoryError;
use crate::order_store::OrderError;
use crate::payment_store::PaymentError;
use record_store::StoreError;
use thiserror::Error;

/// Any failure surfaced by [`CheckoutFacade`](super::CheckoutFacade).
///
/// Steps already committed before the failing one are not undone.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Storage setup failed: {0}")]
    Storage(#[from] StoreError),

    #[error("Store task failed: {0}")]
    StoreTask(String),
}
