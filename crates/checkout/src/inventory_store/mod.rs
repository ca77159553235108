//! Inventory-specific store logic, including the price total and stock decrement.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::InventoryClient;
use crate::model::InventoryItem;
use record_store::{Backend, RecordStore};

/// Creates a new inventory store over `backend` and its client.
pub fn new(
    buffer_size: usize,
    backend: impl Backend<InventoryItem>,
) -> (RecordStore<InventoryItem>, InventoryClient) {
    let (store, generic_client) = RecordStore::new(buffer_size, backend);
    let client = InventoryClient::new(generic_client);

    (store, client)
}
