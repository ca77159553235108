//! # RecordClient Trait
//!
//! Provides a common interface for store-specific clients, adding default `get` and
//! `load_all` methods built on top of a generic [`StoreClient`].
use crate::{StoreClient, StoreError, StoreRecord};
use async_trait::async_trait;

/// Trait for store-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// pub struct OrderClient {
///     inner: StoreClient<Order>,
/// }
///
/// #[async_trait]
/// impl RecordClient<Order> for OrderClient {
///     type Error = OrderError;
///
///     fn inner(&self) -> &StoreClient<Order> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> Self::Error {
///         OrderError::from(e)
///     }
/// }
///
/// // get() and load_all() are provided automatically
/// let order = order_client.get(OrderId(1)).await?;
/// ```
#[async_trait]
pub trait RecordClient<R: StoreRecord>: Send + Sync {
    /// The store-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<R>;

    /// Map store errors to the specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: R::Id) -> Result<Option<R>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch the whole collection.
    #[tracing::instrument(skip(self))]
    async fn load_all(&self) -> Result<Vec<R>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().load().await.map_err(Self::map_error)
    }
}
