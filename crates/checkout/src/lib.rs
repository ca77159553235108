//! # Checkout
//!
//! An e-commerce checkout facade over three flat-file record stores.
//!
//! - **[model]**: the flat records ([`Order`](model::Order), [`Payment`](model::Payment),
//!   [`InventoryItem`](model::InventoryItem)) as they appear in the JSON files.
//! - **[order_store]**, **[payment_store]**, **[inventory_store]**: the
//!   [`StoreRecord`](record_store::StoreRecord) implementation and error type of each store.
//! - **[clients]**: typed wrappers over [`StoreClient`](record_store::StoreClient).
//! - **[lifecycle]**: configuration, the [`CheckoutFacade`](lifecycle::CheckoutFacade) and
//!   store start-up and shutdown.

pub mod clients;
pub mod inventory_store;
pub mod lifecycle;
pub mod model;
pub mod order_store;
pub mod payment_store;
