//! # Generic Store Actor
//!
//! This module defines the `RecordStore`, the component that owns a backing file and performs
//! every read-modify-write cycle against it. It is the "Server" side of the store: requests are
//! processed sequentially, so two callers sharing a client can never interleave a load with
//! another caller's save.

use crate::backend::Backend;
use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::StoreRecord;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns one backing collection.
///
/// # Architecture Note
/// The store holds no records between requests. Every request starts with a full
/// [`Backend::load`] and every mutating request ends with a full [`Backend::save`], which is
/// exactly the flat-file contract. What the actor adds is exclusive ownership: the backend is
/// moved into the store task and nothing else in the process can reach it.
///
/// # Usage Pattern
///
/// 1.  **Create**: `RecordStore::new()` returns the store (server) and a `StoreClient`.
/// 2.  **Run**: spawn `store.run()` in a background task.
/// 3.  **Use**: clone the client wherever access is needed.
///
/// ```rust,ignore
/// let (store, client) = RecordStore::<Order>::new(32, JsonFileBackend::new("orders.json"));
/// let handle = tokio::spawn(store.run());
/// let orders = client.load().await?;
/// ```
///
/// The loop ends when every client has been dropped.
pub struct RecordStore<R: StoreRecord> {
    receiver: mpsc::Receiver<StoreRequest<R>>,
    backend: Box<dyn Backend<R>>,
    record_type: &'static str,
}

impl<R: StoreRecord> RecordStore<R> {
    /// Creates a new `RecordStore` over `backend` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. When it is full, client calls wait
    ///   until there is space.
    /// * `backend` - The storage the store takes exclusive ownership of.
    pub fn new(buffer_size: usize, backend: impl Backend<R>) -> (Self, StoreClient<R>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // "Order" instead of "checkout::model::order::Order"
        let record_type = std::any::type_name::<R>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        let store = Self {
            receiver,
            backend: Box::new(backend),
            record_type,
        };
        (store, StoreClient::new(sender))
    }

    /// Runs the store's event loop, processing requests until every client is dropped.
    pub async fn run(mut self) {
        let record_type = self.record_type;
        let location = self.backend.location();
        info!(record_type, %location, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Load { respond_to } => {
                    let result = self.backend.load();
                    match &result {
                        Ok(records) => debug!(record_type, size = records.len(), "Load"),
                        Err(e) => warn!(record_type, error = %e, "Load failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Save {
                    records,
                    respond_to,
                } => {
                    let result = self.backend.save(&records);
                    match &result {
                        Ok(()) => info!(record_type, size = records.len(), "Saved"),
                        Err(e) => warn!(record_type, error = %e, "Save failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Create { params, respond_to } => {
                    debug!(record_type, ?params, "Create");
                    let result = self.create(params);
                    if let Err(e) = &result {
                        warn!(record_type, error = %e, "Create failed");
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Get { id, respond_to } => {
                    let result = self
                        .backend
                        .load()
                        .map(|records| records.into_iter().find(|r| r.id() == &id));
                    if let Ok(found) = &result {
                        debug!(record_type, %id, found = found.is_some(), "Get");
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(record_type, %id, ?update, "Update");
                    let result = self.update(id, update);
                    if let Err(e) = &result {
                        warn!(record_type, error = %e, "Update failed");
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Query { query, respond_to } => {
                    debug!(record_type, ?query, "Query");
                    let result = self.query(query);
                    if let Err(e) = &result {
                        warn!(record_type, error = %e, "Query failed");
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Action { action, respond_to } => {
                    debug!(record_type, ?action, "Action");
                    let result = self.action(action);
                    match &result {
                        Ok(_) => info!(record_type, "Action ok"),
                        Err(e) => warn!(record_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(record_type, %location, "Shutdown");
    }

    fn create(&self, params: R::Create) -> Result<R, StoreError> {
        let mut records = self.backend.load()?;
        let record = R::from_create_params(&records, params).map_err(record_error)?;
        records.push(record.clone());
        self.backend.save(&records)?;
        info!(
            record_type = self.record_type,
            id = %record.id(),
            size = records.len(),
            "Created"
        );
        Ok(record)
    }

    fn update(&self, id: R::Id, update: R::Update) -> Result<Option<R>, StoreError> {
        let mut records = self.backend.load()?;
        let Some(record) = records.iter_mut().find(|r| r.id() == &id) else {
            warn!(record_type = self.record_type, %id, "Not found");
            return Ok(None);
        };
        record.on_update(update).map_err(record_error)?;
        let updated = record.clone();
        self.backend.save(&records)?;
        info!(record_type = self.record_type, %id, "Updated");
        Ok(Some(updated))
    }

    fn query(&self, query: R::Query) -> Result<R::QueryResult, StoreError> {
        let records = self.backend.load()?;
        R::handle_query(&records, query).map_err(record_error)
    }

    fn action(&self, action: R::Action) -> Result<R::ActionResult, StoreError> {
        let mut records = self.backend.load()?;
        let result = R::handle_action(&mut records, action).map_err(record_error)?;
        self.backend.save(&records)?;
        Ok(result)
    }
}

fn record_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> StoreError {
    StoreError::Record(Box::new(e))
}
