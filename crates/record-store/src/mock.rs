//! # Mock Stores & Testing Guide
//!
//! `MockClient<R>` hands out a real [`StoreClient<R>`] whose requests are answered from a queue
//! of scripted responses instead of a backend. Domain clients and the checkout facade accept a
//! `StoreClient`, so they can be tested against a mock without knowing it.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockClient | RecordStore + InMemoryBackend |
//! |---------|------------|-------------------------------|
//! | **State** | None, responses are scripted | Real read-modify-write cycles |
//! | **Error Injection** | Easy (`return_err`) | Needs a broken file |
//! | **Use Case** | Failure paths, call ordering | Behaviour of the records themselves |
//!
//! ## Fluent API
//!
//! ```rust,ignore
//! let mut payments = MockClient::<Payment>::new();
//! payments.expect_create().return_err(StoreError::ActorClosed);
//!
//! let facade = CheckoutFacade::from_clients(orders, PaymentClient::new(payments.client()), inventory);
//! assert!(facade.place_order(CustomerId(1), vec![ProductId(1)]).await.is_err());
//!
//! payments.verify(); // every scripted response was consumed, in order
//! ```
//!
//! ## Receiver Helpers
//!
//! When a test needs to look at the request payload, use [`create_mock_client`] and answer
//! requests by hand with [`expect_create`], [`expect_update`], [`expect_query`] or
//! [`expect_action`].

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::{Response, StoreRequest};
use crate::record::StoreRecord;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted response waiting for its request.
enum Expectation<R: StoreRecord> {
    Load {
        response: Result<Vec<R>, StoreError>,
    },
    Save {
        response: Result<(), StoreError>,
    },
    Create {
        response: Result<R, StoreError>,
    },
    Get {
        response: Result<Option<R>, StoreError>,
    },
    Update {
        response: Result<Option<R>, StoreError>,
    },
    Query {
        response: Result<R::QueryResult, StoreError>,
    },
    Action {
        response: Result<R::ActionResult, StoreError>,
    },
}

impl<R: StoreRecord> Expectation<R> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Load { .. } => "Load",
            Expectation::Save { .. } => "Save",
            Expectation::Create { .. } => "Create",
            Expectation::Get { .. } => "Get",
            Expectation::Update { .. } => "Update",
            Expectation::Query { .. } => "Query",
            Expectation::Action { .. } => "Action",
        }
    }
}

fn request_kind<R: StoreRecord>(request: &StoreRequest<R>) -> &'static str {
    match request {
        StoreRequest::Load { .. } => "Load",
        StoreRequest::Save { .. } => "Save",
        StoreRequest::Create { .. } => "Create",
        StoreRequest::Get { .. } => "Get",
        StoreRequest::Update { .. } => "Update",
        StoreRequest::Query { .. } => "Query",
        StoreRequest::Action { .. } => "Action",
    }
}

type Queue<R> = Arc<Mutex<VecDeque<Expectation<R>>>>;

/// A mock store with expectation tracking for fluent testing.
///
/// Requests that do not match the next expectation are recorded and their responder is
/// dropped, so the caller sees [`StoreError::ActorDropped`]. [`verify`](MockClient::verify)
/// panics on any recorded mismatch or unconsumed expectation.
pub struct MockClient<R: StoreRecord> {
    client: StoreClient<R>,
    expectations: Queue<R>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<R: StoreRecord> Default for MockClient<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: StoreRecord> MockClient<R> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<R>>(100);
        let expectations: Queue<R> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = Arc::clone(&expectations);
        let log = Arc::clone(&mismatches);

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().expect("mock queue poisoned").pop_front();

                match (request, expectation) {
                    (StoreRequest::Load { respond_to }, Some(Expectation::Load { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Save { respond_to, .. }, Some(Expectation::Save { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Query { respond_to, .. },
                        Some(Expectation::Query { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let expected = expectation.as_ref().map_or("nothing", |e| e.kind());
                        log.lock().expect("mock log poisoned").push(format!(
                            "received {} while expecting {}",
                            request_kind(&request),
                            expected
                        ));
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<R> {
        self.client.clone()
    }

    pub fn expect_load(&mut self) -> ExpectationBuilder<R, Vec<R>> {
        self.builder(|response| Expectation::Load { response })
    }

    pub fn expect_save(&mut self) -> ExpectationBuilder<R, ()> {
        self.builder(|response| Expectation::Save { response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<R, R> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_get(&mut self) -> ExpectationBuilder<R, Option<R>> {
        self.builder(|response| Expectation::Get { response })
    }

    pub fn expect_update(&mut self) -> ExpectationBuilder<R, Option<R>> {
        self.builder(|response| Expectation::Update { response })
    }

    pub fn expect_query(&mut self) -> ExpectationBuilder<R, R::QueryResult> {
        self.builder(|response| Expectation::Query { response })
    }

    pub fn expect_action(&mut self) -> ExpectationBuilder<R, R::ActionResult> {
        self.builder(|response| Expectation::Action { response })
    }

    /// Verifies that every expectation was consumed and nothing unexpected arrived.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().expect("mock log poisoned");
        if !mismatches.is_empty() {
            panic!("Unexpected requests: {}", mismatches.join("; "));
        }
        let remaining = self.expectations.lock().expect("mock queue poisoned");
        if !remaining.is_empty() {
            panic!("Not all expectations were met. {} remaining", remaining.len());
        }
    }

    fn builder<T>(
        &self,
        wrap: fn(Result<T, StoreError>) -> Expectation<R>,
    ) -> ExpectationBuilder<R, T> {
        ExpectationBuilder {
            expectations: Arc::clone(&self.expectations),
            wrap,
        }
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<R: StoreRecord, T> {
    expectations: Queue<R>,
    wrap: fn(Result<T, StoreError>) -> Expectation<R>,
}

impl<R: StoreRecord, T> ExpectationBuilder<R, T> {
    /// Answers the request successfully.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Answers the request with an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, StoreError>) {
        self.expectations
            .lock()
            .expect("mock queue poisoned")
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the store: it pulls requests off the receiver, asserts on their payload
/// and answers through the responder.
pub fn create_mock_client<R: StoreRecord>(
    buffer_size: usize,
) -> (StoreClient<R>, mpsc::Receiver<StoreRequest<R>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<R: StoreRecord>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R::Create, Response<R>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Update request.
pub async fn expect_update<R: StoreRecord>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R::Id, R::Update, Response<Option<R>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Query request.
pub async fn expect_query<R: StoreRecord>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R::Query, Response<R::QueryResult>)> {
    match receiver.recv().await {
        Some(StoreRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<R: StoreRecord>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R::Action, Response<R::ActionResult>)> {
    match receiver.recv().await {
        Some(StoreRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}
