//! One stocked product.
//!
//! # Record Store
//! This struct implements the [`StoreRecord`](record_store::StoreRecord) trait.
//!
//! See [`impl StoreRecord for InventoryItem`](#impl-StoreRecord-for-InventoryItem) for details on:
//! - Price and stock updates ([`InventoryUpdate`])
//! - Collection queries ([`InventoryQuery`](crate::inventory_store::InventoryQuery))
//! - Stock decrements ([`InventoryAction`](crate::inventory_store::InventoryAction))

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Product identifier, chosen by whoever seeds the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// `quantity` is signed: ordering more units than are stocked drives it below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub product_id: ProductId,
    pub quantity: i64,
    pub price: f64,
}

impl InventoryItem {
    pub fn new(product_id: impl Into<ProductId>, quantity: i64, price: f64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            price,
        }
    }
}

// DTO for price and stock corrections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryUpdate {
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}
