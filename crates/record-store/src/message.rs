//! # Store Messages
//!
//! This module defines the message types exchanged between a [`StoreClient`](crate::StoreClient)
//! and its [`RecordStore`](crate::RecordStore).

use crate::error::StoreError;
use crate::record::StoreRecord;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by stores.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to a store to request an operation.
///
/// `Load` and `Save` are the raw whole-collection contract. The remaining variants are
/// read-modify-write cycles the store performs on the caller's behalf:
///
/// - **Create**: load, append a record built from [`StoreRecord::Create`], save.
/// - **Get**: load, linear scan by id.
/// - **Update**: load, linear scan, apply [`StoreRecord::Update`], save. A missing id
///   answers `None` and writes nothing.
/// - **Query**: load, answer a [`StoreRecord::Query`]. Never writes.
/// - **Action**: load, apply a [`StoreRecord::Action`] to the whole collection, save.
#[derive(Debug)]
pub enum StoreRequest<R: StoreRecord> {
    Load {
        respond_to: Response<Vec<R>>,
    },
    Save {
        records: Vec<R>,
        respond_to: Response<()>,
    },
    Create {
        params: R::Create,
        respond_to: Response<R>,
    },
    Get {
        id: R::Id,
        respond_to: Response<Option<R>>,
    },
    Update {
        id: R::Id,
        update: R::Update,
        respond_to: Response<Option<R>>,
    },
    Query {
        query: R::Query,
        respond_to: Response<R::QueryResult>,
    },
    Action {
        action: R::Action,
        respond_to: Response<R::ActionResult>,
    },
}
