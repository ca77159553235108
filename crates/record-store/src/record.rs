//! # StoreRecord Trait
//!
//! The `StoreRecord` trait defines the contract that every flat record (Order, Payment,
//! InventoryItem, …) must implement to be persisted by the generic [`RecordStore`](crate::RecordStore).
//! It names the id type, the DTOs for creation and update, the collection-wide queries and
//! actions a record type supports, and the error type its hooks can raise.
//!
//! # Whole-Collection Semantics
//! A record store never keeps records between requests. Every hook receives either a single
//! record that was just loaded, or the full collection that was just loaded. Hooks that receive
//! `&mut` access are followed by a full save of the collection.
//!
//! # Unused Operations
//! Record types that have nothing to update, query or act on use [`std::convert::Infallible`]
//! for that associated type and implement the hook with an empty `match`:
//!
//! ```rust,ignore
//! fn handle_query(_: &[Self], query: Infallible) -> Result<Self::QueryResult, Self::Error> {
//!     match query {}
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Trait that any flat record must implement to be managed by a [`RecordStore`](crate::RecordStore).
///
/// # Architecture Note
/// The store loop is written once against this trait and reused for orders, payments and
/// inventory. Associated types keep the payloads apart: an `OrderCreate` can never be sent
/// to the payment store.
pub trait StoreRecord:
    Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The identifier used for linear-scan lookups.
    type Id: PartialEq + Clone + Send + Sync + Display + Debug;

    /// The data required to append a new record.
    type Create: Send + Sync + Debug;

    /// The data required to change one existing record.
    type Update: Send + Sync + Debug;

    /// Read-only operations over the whole collection.
    type Query: Send + Sync + Debug;

    /// The result type returned by queries.
    type QueryResult: Send + Sync + Debug;

    /// Mutating operations over the whole collection (always followed by a save).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The error type raised by the hooks below.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this record.
    fn id(&self) -> &Self::Id;

    /// Build a new record from its payload.
    ///
    /// `existing` is the collection the record will be appended to, so sequential ids are
    /// derived from it (`existing.len() + 1`).
    fn from_create_params(existing: &[Self], params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply an update to a record found by id.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Answer a read-only question about the collection.
    fn handle_query(records: &[Self], query: Self::Query) -> Result<Self::QueryResult, Self::Error>;

    /// Mutate the collection in place.
    fn handle_action(
        records: &mut [Self],
        action: Self::Action,
    ) -> Result<Self::ActionResult, Self::Error>;
}
