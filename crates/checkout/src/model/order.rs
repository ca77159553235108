//! Represents a customer order.
//!
//! # Record Store
//! This struct implements the [`StoreRecord`](record_store::StoreRecord) trait, so it is
//! persisted by a [`RecordStore`](record_store::RecordStore) as one element of `orders.json`.
//!
//! See [`impl StoreRecord for Order`](#impl-StoreRecord-for-Order) for details on:
//! - Creation parameters ([`OrderCreate`])
//! - Status changes ([`OrderStatus`])

use crate::model::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Sequential order identifier, derived from the collection size at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Identifier of the customer placing an order. Never looked up anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u32);

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub product_ids: Vec<ProductId>,
    pub total_amount: f64,
    pub status: OrderStatus,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub product_ids: Vec<ProductId>,
    pub total_amount: f64,
}

impl Order {
    /// Creates a new Order in the `created` state.
    ///
    /// # Arguments
    /// * `order_id` - Sequential identifier (assigned by the order store)
    /// * `customer_id` - Customer placing the order
    /// * `product_ids` - One entry per unit ordered, duplicates allowed
    /// * `total_amount` - Sum of the unit prices at the time of ordering
    pub fn new(
        order_id: OrderId,
        customer_id: CustomerId,
        product_ids: Vec<ProductId>,
        total_amount: f64,
    ) -> Self {
        Self {
            order_id,
            customer_id,
            product_ids,
            total_amount,
            status: OrderStatus::Created,
        }
    }

    pub fn is_canceled(&self) -> bool {
        self.status == OrderStatus::Canceled
    }
}
