//! # Inventory Client
//!
//! Provides a high-level API over the inventory store: price totals, stock decrements,
//! and the maintenance operations used to seed and correct the stock.
use crate::inventory_store::{
    InventoryAction, InventoryActionResult, InventoryError, InventoryQuery, InventoryQueryResult,
};
use crate::model::{InventoryItem, InventoryUpdate, ProductId};
use async_trait::async_trait;
use record_store::{RecordClient, StoreClient, StoreError};
use tracing::{debug, info, instrument};

/// Client for interacting with the inventory store.
#[derive(Clone)]
pub struct InventoryClient {
    inner: StoreClient<InventoryItem>,
}

impl InventoryClient {
    pub fn new(inner: StoreClient<InventoryItem>) -> Self {
        Self { inner }
    }

    /// Sums the unit price of every listed product, counting repeats. Unknown ids add nothing.
    #[instrument(skip(self))]
    pub async fn total_price(&self, product_ids: Vec<ProductId>) -> Result<f64, InventoryError> {
        debug!("Sending request");
        match self
            .inner
            .query(InventoryQuery::TotalPrice(product_ids))
            .await?
        {
            InventoryQueryResult::TotalPrice(total) => Ok(total),
            other => Err(InventoryError::UnexpectedResponse(format!("{other:?}"))),
        }
    }

    /// Takes one unit off the stock per listed id. Returns how many units were taken.
    #[instrument(skip(self))]
    pub async fn decrement(&self, product_ids: Vec<ProductId>) -> Result<usize, InventoryError> {
        debug!("Sending request");
        let InventoryActionResult::Decremented(count) = self
            .inner
            .perform_action(InventoryAction::Decrement(product_ids))
            .await?;
        info!(count, "Stock decremented");
        Ok(count)
    }

    /// Current quantity of a product, or `None` if it is not stocked.
    #[instrument(skip(self))]
    pub async fn stock_level(&self, product_id: ProductId) -> Result<Option<i64>, InventoryError> {
        debug!("Checking stock");
        match self
            .inner
            .query(InventoryQuery::StockLevel(product_id))
            .await?
        {
            InventoryQueryResult::StockLevel(level) => Ok(level),
            other => Err(InventoryError::UnexpectedResponse(format!("{other:?}"))),
        }
    }

    /// Stocks a new product. Fails with [`InventoryError::DuplicateProduct`] if the id is taken.
    #[instrument(skip(self))]
    pub async fn add_item(&self, item: InventoryItem) -> Result<InventoryItem, InventoryError> {
        debug!("Sending request");
        Ok(self.inner.create(item).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        product_id: ProductId,
        update: InventoryUpdate,
    ) -> Result<Option<InventoryItem>, InventoryError> {
        debug!("Sending request");
        Ok(self.inner.update(product_id, update).await?)
    }

    /// Replaces the whole inventory.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn seed(&self, items: Vec<InventoryItem>) -> Result<(), InventoryError> {
        debug!("Sending request");
        Ok(self.inner.save(items).await?)
    }
}

#[async_trait]
impl RecordClient<InventoryItem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &StoreClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        InventoryError::from(e)
    }
}
