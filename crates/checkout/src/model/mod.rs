//! Flat records implementing the [`StoreRecord`](record_store::StoreRecord) trait.
//!
//! Field names are the JSON keys of the backing files.

pub mod inventory;
pub mod order;
pub mod payment;

pub use inventory::*;
pub use order::*;
pub use payment::*;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_serializes_flat_with_lowercase_status() {
        let order = Order::new(
            OrderId(1),
            CustomerId(101),
            vec![ProductId(1), ProductId(2)],
            150.0,
        );

        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(
            value,
            json!({
                "order_id": 1,
                "customer_id": 101,
                "product_ids": [1, 2],
                "total_amount": 150.0,
                "status": "created"
            })
        );
    }

    #[test]
    fn test_canceled_status_reads_back() {
        let raw = r#"{"order_id": 3, "customer_id": 7, "product_ids": [], "total_amount": 0.0, "status": "canceled"}"#;

        let order: Order = serde_json::from_str(raw).unwrap();

        assert!(order.is_canceled());
        assert_eq!(order.order_id, OrderId(3));
    }

    #[test]
    fn test_payment_and_inventory_field_names() {
        let payment = Payment::new(PaymentId(2), OrderId(5), 42.5);
        assert_eq!(
            serde_json::to_value(&payment).unwrap(),
            json!({"payment_id": 2, "order_id": 5, "amount": 42.5, "status": "processed"})
        );

        let item: InventoryItem =
            serde_json::from_str(r#"{"product_id": 9, "quantity": -2, "price": 3.25}"#).unwrap();
        assert_eq!(item, InventoryItem::new(9, -2, 3.25));
    }

    #[test]
    fn test_ids_display_with_prefix() {
        assert_eq!(OrderId(4).to_string(), "order_4");
        assert_eq!(PaymentId(4).to_string(), "payment_4");
        assert_eq!(ProductId(4).to_string(), "product_4");
    }
}
