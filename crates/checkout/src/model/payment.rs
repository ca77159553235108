use crate::model::OrderId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Sequential payment identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(pub u32);

impl From<u32> for PaymentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "payment_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Processed,
}

/// A processed payment.
///
/// `order_id` is a weak reference: nothing checks that the order exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: PaymentId,
    pub order_id: OrderId,
    pub amount: f64,
    pub status: PaymentStatus,
}

/// Payload for processing a payment.
#[derive(Debug, Clone)]
pub struct PaymentCreate {
    pub order_id: OrderId,
    pub amount: f64,
}

impl Payment {
    pub fn new(payment_id: PaymentId, order_id: OrderId, amount: f64) -> Self {
        Self {
            payment_id,
            order_id,
            amount,
            status: PaymentStatus::Processed,
        }
    }
}
