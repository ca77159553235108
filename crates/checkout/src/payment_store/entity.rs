//! StoreRecord implementation for the Payment record type.

use crate::model::{Payment, PaymentCreate, PaymentId};
use record_store::StoreRecord;
use std::convert::Infallible;

impl StoreRecord for Payment {
    type Id = PaymentId;
    type Create = PaymentCreate;
    // Payments are never changed once processed.
    type Update = Infallible;
    type Query = Infallible;
    type QueryResult = ();
    type Action = Infallible;
    type ActionResult = ();
    type Error = Infallible;

    fn id(&self) -> &PaymentId {
        &self.payment_id
    }

    fn from_create_params(existing: &[Self], params: PaymentCreate) -> Result<Self, Infallible> {
        let payment_id = PaymentId(existing.len() as u32 + 1);
        Ok(Self::new(payment_id, params.order_id, params.amount))
    }

    fn on_update(&mut self, update: Infallible) -> Result<(), Infallible> {
        match update {}
    }

    fn handle_query(_: &[Self], query: Infallible) -> Result<(), Infallible> {
        match query {}
    }

    fn handle_action(_: &mut [Self], action: Infallible) -> Result<(), Infallible> {
        match action {}
    }
}
