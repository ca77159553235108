//! # Record Store
//!
//! Flat-file record stores owned by actors. A store keeps a whole collection of flat records in
//! one backing file and exposes it through two primitive operations: load everything, save
//! everything. Every higher-level operation (append, find-and-change, collection-wide queries
//! and mutations) is a read-modify-write cycle over the full collection.
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`StoreRecord`]) - what a record type is and how it is created, updated,
//!    queried and mutated.
//! 2. **Storage Layer** ([`Backend`]) - [`JsonFileBackend`] on disk, [`InMemoryBackend`] in tests.
//! 3. **Runtime Layer** ([`RecordStore`]) - one Tokio task per backing file, processing requests
//!    sequentially.
//! 4. **Interface Layer** ([`StoreClient`], [`RecordClient`]) - cloneable, typed async handles.
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own Tokio task and owns its backend outright.
//! - Requests are handled one at a time, so a load and the save that follows it are never
//!   interleaved with another caller's cycle inside this process.
//! - Nothing protects the file from *other processes*: last writer wins on the whole file.
//! - File I/O is plain blocking `std::fs`; the files are small and the task does nothing else.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! let (store, client) = RecordStore::<Order>::new(32, JsonFileBackend::new("orders.json"));
//! let handle = tokio::spawn(store.run());
//!
//! let order = client.create(OrderCreate { .. }).await?;
//! let canceled = client.update(order.order_id, OrderStatus::Canceled).await?;
//!
//! drop(client);
//! handle.await?;
//! ```
//!
//! ## Testing
//!
//! See the [`mock`] module for [`MockClient`](mock::MockClient) and the receiver helpers.

pub mod backend;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;
pub mod store;
pub mod tracing;

#[cfg(test)]
mod testing;

pub use backend::{Backend, InMemoryBackend, JsonFileBackend};
pub use client::StoreClient;
pub use client_trait::RecordClient;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use record::StoreRecord;
pub use store::RecordStore;
