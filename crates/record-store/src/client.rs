//! # Generic Client
//!
//! This module defines the generic client for communicating with a [`RecordStore`](crate::RecordStore).

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::StoreRecord;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a `RecordStore`.
///
/// The client holds only a sender, so cloning is cheap and every clone talks to the same
/// store. All methods resolve to `Result<…, StoreError>`.
pub struct StoreClient<R: StoreRecord> {
    sender: mpsc::Sender<StoreRequest<R>>,
}

impl<R: StoreRecord> Clone for StoreClient<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<R: StoreRecord> StoreClient<R> {
    pub fn new(sender: mpsc::Sender<StoreRequest<R>>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, StoreError>>) -> StoreRequest<R>,
    ) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn load(&self) -> Result<Vec<R>, StoreError> {
        self.request(|respond_to| StoreRequest::Load { respond_to })
            .await
    }

    pub async fn save(&self, records: Vec<R>) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::Save {
            records,
            respond_to,
        })
        .await
    }

    pub async fn create(&self, params: R::Create) -> Result<R, StoreError> {
        self.request(|respond_to| StoreRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: R::Id) -> Result<Option<R>, StoreError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(&self, id: R::Id, update: R::Update) -> Result<Option<R>, StoreError> {
        self.request(|respond_to| StoreRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn query(&self, query: R::Query) -> Result<R::QueryResult, StoreError> {
        self.request(|respond_to| StoreRequest::Query { query, respond_to })
            .await
    }

    pub async fn perform_action(&self, action: R::Action) -> Result<R::ActionResult, StoreError> {
        self.request(|respond_to| StoreRequest::Action { action, respond_to })
            .await
    }
}
