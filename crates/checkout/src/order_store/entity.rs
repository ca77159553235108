//! StoreRecord implementation for the Order record type.
//!
//! Orders are only ever appended and have their status flipped. There are no collection-wide
//! queries or actions, so those associated types are [`Infallible`].

use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use record_store::StoreRecord;
use std::convert::Infallible;

impl StoreRecord for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderStatus;
    type Query = Infallible;
    type QueryResult = ();
    type Action = Infallible;
    type ActionResult = ();
    type Error = Infallible;

    fn id(&self) -> &OrderId {
        &self.order_id
    }

    /// New id is the collection size plus one. Ids repeat if records are ever removed by hand.
    fn from_create_params(existing: &[Self], params: OrderCreate) -> Result<Self, Infallible> {
        let order_id = OrderId(existing.len() as u32 + 1);
        Ok(Self::new(
            order_id,
            params.customer_id,
            params.product_ids,
            params.total_amount,
        ))
    }

    fn on_update(&mut self, status: OrderStatus) -> Result<(), Infallible> {
        self.status = status;
        Ok(())
    }

    fn handle_query(_: &[Self], query: Infallible) -> Result<(), Infallible> {
        match query {}
    }

    fn handle_action(_: &mut [Self], action: Infallible) -> Result<(), Infallible> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerId, ProductId};

    fn params() -> OrderCreate {
        OrderCreate {
            customer_id: CustomerId(101),
            product_ids: vec![ProductId(1), ProductId(2)],
            total_amount: 150.0,
        }
    }

    #[test]
    fn test_first_order_gets_id_one() {
        let order = Order::from_create_params(&[], params()).unwrap();

        assert_eq!(order.order_id, OrderId(1));
        assert_eq!(order.status, OrderStatus::Created);
        assert_eq!(order.total_amount, 150.0);
    }

    #[test]
    fn test_id_follows_collection_size() {
        let first = Order::from_create_params(&[], params()).unwrap();
        let second = Order::from_create_params(&[first.clone()], params()).unwrap();
        let third = Order::from_create_params(&[first, second], params()).unwrap();

        assert_eq!(third.order_id, OrderId(3));
    }

    #[test]
    fn test_cancel_sets_status() {
        let mut order = Order::from_create_params(&[], params()).unwrap();

        order.on_update(OrderStatus::Canceled).unwrap();

        assert!(order.is_canceled());
    }
}
