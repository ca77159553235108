use checkout::clients::{InventoryClient, OrderClient, PaymentClient};
use checkout::inventory_store::{self, InventoryQueryResult};
use checkout::lifecycle::{CheckoutError, CheckoutFacade};
use checkout::model::{CustomerId, InventoryItem, Order, OrderStatus, Payment, ProductId};
use checkout::order_store;
use checkout::payment_store::PaymentError;
use record_store::mock::MockClient;
use record_store::{InMemoryBackend, StoreError};

/// Real order and inventory stores, mocked payment store.
///
/// A payment failure must leave the already-recorded order in place and must stop before
/// the stock is touched.
#[tokio::test]
async fn test_payment_failure_keeps_order_and_stock() {
    let orders = InMemoryBackend::<Order>::new();
    let inventory = InMemoryBackend::with_records(vec![InventoryItem::new(1, 10, 100.0)]);

    let (order_store, order_client) = order_store::new(8, orders.clone());
    let (inventory_store, inventory_client) = inventory_store::new(8, inventory.clone());
    let order_handle = tokio::spawn(order_store.run());
    let inventory_handle = tokio::spawn(inventory_store.run());

    let mut payment_mock = MockClient::<Payment>::new();
    payment_mock.expect_create().return_err(StoreError::Io {
        path: "payments.json".into(),
        source: std::io::Error::other("disk full"),
    });

    let facade = CheckoutFacade::from_clients(
        order_client,
        PaymentClient::new(payment_mock.client()),
        inventory_client,
    );

    let result = facade
        .place_order(CustomerId(101), vec![ProductId(1)])
        .await;

    assert!(matches!(
        result,
        Err(CheckoutError::Payment(PaymentError::Persistence(_)))
    ));

    let recorded = orders.snapshot().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].status, OrderStatus::Created);
    assert_eq!(recorded[0].total_amount, 100.0);
    assert_eq!(
        inventory.snapshot().unwrap(),
        vec![InventoryItem::new(1, 10, 100.0)]
    );

    payment_mock.verify();
    facade.shutdown().await.unwrap();
    order_handle.await.unwrap();
    inventory_handle.await.unwrap();
}

/// Fully mocked: the order is created with the total the inventory reported.
#[tokio::test]
async fn test_order_total_comes_from_inventory() {
    let mut inventory_mock = MockClient::<InventoryItem>::new();
    inventory_mock
        .expect_query()
        .return_ok(InventoryQueryResult::TotalPrice(75.0));
    inventory_mock
        .expect_action()
        .return_ok(inventory_store::InventoryActionResult::Decremented(1));

    let (order_store, order_client) = order_store::new(8, InMemoryBackend::new());
    let (payment_store, payment_client) =
        checkout::payment_store::new(8, InMemoryBackend::new());
    let order_handle = tokio::spawn(order_store.run());
    let payment_handle = tokio::spawn(payment_store.run());

    let facade = CheckoutFacade::from_clients(
        order_client,
        payment_client,
        InventoryClient::new(inventory_mock.client()),
    );

    let placed = facade
        .place_order(CustomerId(3), vec![ProductId(8)])
        .await
        .unwrap();

    assert_eq!(placed.order.total_amount, 75.0);
    assert_eq!(placed.payment.amount, 75.0);
    inventory_mock.verify();

    facade.shutdown().await.unwrap();
    order_handle.await.unwrap();
    payment_handle.await.unwrap();
}

/// Canceling goes straight to the order store and nowhere else.
#[tokio::test]
async fn test_cancel_touches_only_orders() {
    let mut order_mock = MockClient::<Order>::new();
    let payment_mock = MockClient::<Payment>::new();
    let inventory_mock = MockClient::<InventoryItem>::new();
    order_mock.expect_update().return_ok(None);

    let facade = CheckoutFacade::from_clients(
        OrderClient::new(order_mock.client()),
        PaymentClient::new(payment_mock.client()),
        InventoryClient::new(inventory_mock.client()),
    );

    let result = facade.cancel_order(checkout::model::OrderId(1)).await.unwrap();

    assert!(result.is_none());
    order_mock.verify();
    payment_mock.verify();
    inventory_mock.verify();
}

/// Real order and payment stores, mocked inventory whose decrement fails.
///
/// The order and its payment are both already written when the stock update fails, and
/// neither is undone.
#[tokio::test]
async fn test_stock_failure_keeps_order_and_payment() {
    let orders = InMemoryBackend::<Order>::new();
    let payments = InMemoryBackend::<Payment>::new();

    let (order_store, order_client) = order_store::new(8, orders.clone());
    let (payment_store, payment_client) = checkout::payment_store::new(8, payments.clone());
    let order_handle = tokio::spawn(order_store.run());
    let payment_handle = tokio::spawn(payment_store.run());

    let mut inventory_mock = MockClient::<InventoryItem>::new();
    inventory_mock
        .expect_query()
        .return_ok(InventoryQueryResult::TotalPrice(10.0));
    inventory_mock.expect_action().return_err(StoreError::ActorClosed);

    let facade = CheckoutFacade::from_clients(
        order_client,
        payment_client,
        InventoryClient::new(inventory_mock.client()),
    );

    let result = facade
        .place_order(CustomerId(101), vec![ProductId(1)])
        .await;

    assert!(matches!(result, Err(CheckoutError::Inventory(_))));

    let recorded_orders = orders.snapshot().unwrap();
    let recorded_payments = payments.snapshot().unwrap();
    assert_eq!(recorded_orders.len(), 1);
    assert_eq!(recorded_payments.len(), 1);
    assert_eq!(recorded_payments[0].order_id, recorded_orders[0].order_id);
    assert_eq!(recorded_payments[0].amount, 10.0);

    inventory_mock.verify();
    facade.shutdown().await.unwrap();
    order_handle.await.unwrap();
    payment_handle.await.unwrap();
}
