//! Order-specific store logic and record implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use record_store::{Backend, RecordStore};

/// Creates a new order store over `backend` and its client.
pub fn new(buffer_size: usize, backend: impl Backend<Order>) -> (RecordStore<Order>, OrderClient) {
    let (store, generic_client) = RecordStore::new(buffer_size, backend);
    let client = OrderClient::new(generic_client);

    (store, client)
}
