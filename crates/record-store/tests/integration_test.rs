use record_store::{Backend, JsonFileBackend, RecordStore, StoreError, StoreRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::convert::Infallible;
use tempfile::TempDir;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Ticket {
    ticket_id: u32,
    holder: String,
    used: bool,
}

#[derive(Debug)]
struct MarkUsed;

impl StoreRecord for Ticket {
    type Id = u32;
    type Create = String;
    type Update = MarkUsed;
    type Query = Infallible;
    type QueryResult = ();
    type Action = Infallible;
    type ActionResult = ();
    type Error = Infallible;

    fn id(&self) -> &u32 {
        &self.ticket_id
    }

    fn from_create_params(existing: &[Self], holder: String) -> Result<Self, Infallible> {
        Ok(Self {
            ticket_id: existing.len() as u32 + 1,
            holder,
            used: false,
        })
    }

    fn on_update(&mut self, _: MarkUsed) -> Result<(), Infallible> {
        self.used = true;
        Ok(())
    }

    fn handle_query(_: &[Self], query: Infallible) -> Result<(), Infallible> {
        match query {}
    }

    fn handle_action(_: &mut [Self], action: Infallible) -> Result<(), Infallible> {
        match action {}
    }
}

/// Many callers sharing one store still get distinct sequential ids,
/// because the store runs every read-modify-write cycle to completion.
#[tokio::test]
async fn test_concurrent_creates_through_one_store_get_unique_ids() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tickets.json");
    let backend = JsonFileBackend::<Ticket>::new(&path);
    backend.ensure_exists(&[]).unwrap();

    let (store, client) = RecordStore::new(32, backend);
    let store_handle = tokio::spawn(store.run());

    let mut handles = vec![];
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.create(format!("holder_{i}")).await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let ticket = handle.await.unwrap().expect("create failed");
        ids.insert(ticket.ticket_id);
    }
    assert_eq!(ids, (1..=20).collect::<HashSet<_>>());

    drop(client);
    store_handle.await.unwrap();

    // The file alone is the source of truth.
    let on_disk = JsonFileBackend::<Ticket>::new(&path).load().unwrap();
    assert_eq!(on_disk.len(), 20);
    assert!(on_disk.iter().all(|t| !t.used));
}

#[tokio::test]
async fn test_update_is_visible_to_a_fresh_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tickets.json");
    JsonFileBackend::<Ticket>::new(&path).ensure_exists(&[]).unwrap();

    let (store, client) = RecordStore::new(8, JsonFileBackend::<Ticket>::new(&path));
    let handle = tokio::spawn(store.run());
    let ticket = client.create("alice".to_string()).await.unwrap();
    client.update(ticket.ticket_id, MarkUsed).await.unwrap();
    drop(client);
    handle.await.unwrap();

    let (store, client) = RecordStore::new(8, JsonFileBackend::<Ticket>::new(&path));
    tokio::spawn(store.run());
    let reloaded = client.get(ticket.ticket_id).await.unwrap().unwrap();
    assert!(reloaded.used);
    assert_eq!(reloaded.holder, "alice");
}

#[tokio::test]
async fn test_missing_file_propagates_io_error() {
    let dir = TempDir::new().unwrap();
    let (store, client) =
        RecordStore::new(8, JsonFileBackend::<Ticket>::new(dir.path().join("absent.json")));
    tokio::spawn(store.run());

    let err = client.create("bob".to_string()).await.unwrap_err();

    assert!(matches!(err, StoreError::Io { .. }));
    assert!(!err.is_communication());
}

#[tokio::test]
async fn test_closed_store_is_a_communication_error() {
    let (store, client) = RecordStore::<Ticket>::new(8, record_store::InMemoryBackend::new());
    drop(store);

    let err = client.load().await.unwrap_err();

    assert!(matches!(err, StoreError::ActorClosed));
    assert!(err.is_communication());
}
