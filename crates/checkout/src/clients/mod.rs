//! Type-safe wrappers around [`StoreClient`](record_store::StoreClient).

pub mod inventory_client;
pub mod order_client;
pub mod payment_client;

pub use inventory_client::*;
pub use order_client::*;
pub use payment_client::*;
