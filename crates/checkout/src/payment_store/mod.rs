//! Payment-specific store logic and record implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PaymentClient;
use crate::model::Payment;
use record_store::{Backend, RecordStore};

/// Creates a new payment store over `backend` and its client.
pub fn new(
    buffer_size: usize,
    backend: impl Backend<Payment>,
) -> (RecordStore<Payment>, PaymentClient) {
    let (store, generic_client) = RecordStore::new(buffer_size, backend);
    (store, PaymentClient::new(generic_client))
}
