//! Collection-wide queries and actions for the inventory store.
//!
//! Both work on a list of product ids in which a product appears once per unit ordered.
//! Ids that match no stocked product are skipped without error.
//!
//! See [`impl StoreRecord for InventoryItem`](crate::model::InventoryItem#impl-StoreRecord-for-InventoryItem)
//! for the implementation details.

use crate::model::ProductId;

/// Read-only operations over the whole inventory.
#[derive(Debug, Clone)]
pub enum InventoryQuery {
    /// Sum of unit prices, one price per occurrence of each id.
    TotalPrice(Vec<ProductId>),
    /// Current quantity of one product, if it is stocked.
    StockLevel(ProductId),
}

/// Results from InventoryQuery - variants match 1:1 with InventoryQuery
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryQueryResult {
    TotalPrice(f64),
    StockLevel(Option<i64>),
}

/// Mutating operations over the whole inventory. The store saves after each one.
#[derive(Debug, Clone)]
pub enum InventoryAction {
    /// Takes one unit off the stock for each occurrence of each id.
    ///
    /// No floor check: quantities may go negative.
    Decrement(Vec<ProductId>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    /// Number of units actually taken off the stock.
    Decremented(usize),
}
