//! # Order Client
//!
//! Appends orders and flips their status through the order store.
use crate::model::{CustomerId, Order, OrderCreate, OrderId, OrderStatus, ProductId};
use crate::order_store::OrderError;
use async_trait::async_trait;
use record_store::{RecordClient, StoreClient, StoreError};
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Appends a new order in the `created` state and returns it.
    #[instrument(skip(self, product_ids))]
    pub async fn create_order(
        &self,
        customer_id: CustomerId,
        product_ids: Vec<ProductId>,
        total_amount: f64,
    ) -> Result<Order, OrderError> {
        debug!(?product_ids, "Sending request");
        let order = self
            .inner
            .create(OrderCreate {
                customer_id,
                product_ids,
                total_amount,
            })
            .await?;
        info!(order_id = %order.order_id, "Order created");
        Ok(order)
    }

    /// Marks an order as canceled.
    ///
    /// Returns `None` when no order has this id. Canceling twice is allowed and
    /// rewrites the same status.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: OrderId) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        let canceled = self.inner.update(order_id, OrderStatus::Canceled).await?;
        if canceled.is_none() {
            warn!("No order to cancel");
        }
        Ok(canceled)
    }
}

#[async_trait]
impl RecordClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderError::from(e)
    }
}
