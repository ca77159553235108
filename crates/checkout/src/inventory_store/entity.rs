//! StoreRecord implementation for the InventoryItem record type.
//!
//! Includes the collection-wide price total and stock decrement used by checkout.

use super::actions::{InventoryAction, InventoryActionResult, InventoryQuery, InventoryQueryResult};
use super::error::InventoryError;
use crate::model::{InventoryItem, InventoryUpdate, ProductId};
use record_store::StoreRecord;

impl StoreRecord for InventoryItem {
    type Id = ProductId;
    type Create = InventoryItem;
    type Update = InventoryUpdate;
    type Query = InventoryQuery;
    type QueryResult = InventoryQueryResult;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Error = InventoryError;

    fn id(&self) -> &ProductId {
        &self.product_id
    }

    /// Product ids are chosen by the caller, so a second item with the same id is refused.
    fn from_create_params(existing: &[Self], item: InventoryItem) -> Result<Self, InventoryError> {
        if existing.iter().any(|i| i.product_id == item.product_id) {
            return Err(InventoryError::DuplicateProduct(item.product_id));
        }
        Ok(item)
    }

    fn on_update(&mut self, update: InventoryUpdate) -> Result<(), InventoryError> {
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    fn handle_query(
        records: &[Self],
        query: InventoryQuery,
    ) -> Result<InventoryQueryResult, InventoryError> {
        match query {
            InventoryQuery::TotalPrice(product_ids) => {
                let total = product_ids
                    .iter()
                    .flat_map(move |pid| records.iter().filter(move |i| i.product_id == *pid))
                    .map(|i| i.price)
                    .sum();
                Ok(InventoryQueryResult::TotalPrice(total))
            }
            InventoryQuery::StockLevel(product_id) => Ok(InventoryQueryResult::StockLevel(
                records
                    .iter()
                    .find(|i| i.product_id == product_id)
                    .map(|i| i.quantity),
            )),
        }
    }

    fn handle_action(
        records: &mut [Self],
        action: InventoryAction,
    ) -> Result<InventoryActionResult, InventoryError> {
        match action {
            InventoryAction::Decrement(product_ids) => {
                let mut decremented = 0;
                for pid in &product_ids {
                    for item in records.iter_mut().filter(|i| i.product_id == *pid) {
                        item.quantity -= 1;
                        decremented += 1;
                    }
                }
                Ok(InventoryActionResult::Decremented(decremented))
            }
        }
    }
}
