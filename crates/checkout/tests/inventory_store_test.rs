use checkout::inventory_store::{self, InventoryError};
use checkout::model::{InventoryItem, InventoryUpdate, ProductId};
use record_store::{InMemoryBackend, RecordClient};

#[tokio::test]
async fn test_seed_replaces_whole_inventory() {
    let backend = InMemoryBackend::with_records(vec![InventoryItem::new(9, 1, 1.0)]);
    let (store, client) = inventory_store::new(8, backend.clone());
    let handle = tokio::spawn(store.run());

    client
        .seed(vec![
            InventoryItem::new(1, 10, 100.0),
            InventoryItem::new(2, 5, 50.0),
        ])
        .await
        .unwrap();

    assert_eq!(
        backend.snapshot().unwrap(),
        vec![InventoryItem::new(1, 10, 100.0), InventoryItem::new(2, 5, 50.0)]
    );
    assert_eq!(client.stock_level(ProductId(9)).await.unwrap(), None);

    drop(client);
    handle.await.unwrap();
}

/// `seed` writes whatever it is given; only `add_item` checks for duplicates.
#[tokio::test]
async fn test_seed_accepts_duplicates_but_add_item_refuses_them() {
    let backend = InMemoryBackend::new();
    let (store, client) = inventory_store::new(8, backend.clone());
    let handle = tokio::spawn(store.run());

    client
        .seed(vec![
            InventoryItem::new(1, 3, 3.0),
            InventoryItem::new(1, 4, 7.0),
        ])
        .await
        .unwrap();
    let err = client
        .add_item(InventoryItem::new(1, 1, 1.0))
        .await
        .unwrap_err();

    assert!(matches!(err, InventoryError::DuplicateProduct(ProductId(1))));
    assert_eq!(client.load_all().await.unwrap().len(), 2);
    // Both duplicates are priced.
    assert_eq!(client.total_price(vec![ProductId(1)]).await.unwrap(), 10.0);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_update_item_changes_first_match_only() {
    let backend = InMemoryBackend::with_records(vec![
        InventoryItem::new(1, 3, 3.0),
        InventoryItem::new(1, 4, 7.0),
    ]);
    let (store, client) = inventory_store::new(8, backend.clone());
    let handle = tokio::spawn(store.run());

    let updated = client
        .update_item(
            ProductId(1),
            InventoryUpdate {
                price: None,
                quantity: Some(0),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated, Some(InventoryItem::new(1, 0, 3.0)));
    assert_eq!(
        backend.snapshot().unwrap(),
        vec![InventoryItem::new(1, 0, 3.0), InventoryItem::new(1, 4, 7.0)]
    );

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_update_item_on_unknown_product_writes_nothing() {
    let backend = InMemoryBackend::with_records(vec![InventoryItem::new(1, 3, 3.0)]);
    let (store, client) = inventory_store::new(8, backend.clone());
    let handle = tokio::spawn(store.run());

    let updated = client
        .update_item(
            ProductId(5),
            InventoryUpdate {
                price: Some(1.0),
                quantity: None,
            },
        )
        .await
        .unwrap();

    assert!(updated.is_none());
    assert_eq!(backend.snapshot().unwrap(), vec![InventoryItem::new(1, 3, 3.0)]);

    drop(client);
    handle.await.unwrap();
}
