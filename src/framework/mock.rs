//! # Mock Framework & Testing Guide
//!
//! Utilities for testing client wrappers (e.g. `MachineClient`) without spawning a real actor.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | No real state (expectations) | Real ledger |
//! | **Use Case** | Logic *around* the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Requires specific state |
//!
//! Two styles are available:
//!
//! - [`create_mock_client`] returns a client plus the raw request receiver. The test pulls
//!   requests with [`expect_get`] / [`expect_action`] and answers them by hand.
//! - [`MockClient`] answers requests from a queue of expectations set up front.
//!
//! ```rust
//! use coffee_machine::framework::FrameworkError;
//! use coffee_machine::framework::mock::MockClient;
//! use coffee_machine::model::CoffeeMachine;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<CoffeeMachine>::new();
//!     mock.expect_get().return_err(FrameworkError::ActorClosed);
//!
//!     let result = mock.client().get().await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// An expected request to the mock client and the response to send back.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<T, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in the order they were registered.
/// A request that does not match the next expectation panics the mock task, which
/// closes the channel and surfaces as `FrameworkError::ActorDropped` in the caller.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, state: T) {
        self.push(Ok(state));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get { response });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action { response });
    }
}

/// Creates a mock client and a receiver for asserting requests.
///
/// The test inspects the requests arriving on `receiver` and answers them itself,
/// which makes it easy to assert on the exact action a client sent.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<T, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        value: u32,
    }

    #[derive(Debug)]
    enum CounterAction {
        Add(u32),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Counter error")]
    struct CounterError;

    impl ActorEntity for Counter {
        type Action = CounterAction;
        type ActionResult = u32;
        type Error = CounterError;

        fn handle_action(&mut self, action: CounterAction) -> Result<u32, CounterError> {
            match action {
                CounterAction::Add(n) => {
                    self.value += n;
                    Ok(self.value)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Counter>(10);

        let action_task = tokio::spawn(async move { client.perform_action(CounterAction::Add(3)).await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, CounterAction::Add(3)));
        responder.send(Ok(3)).unwrap();

        let result = action_task.await.unwrap();
        assert!(matches!(result, Ok(3)));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Counter>::new();

        mock.expect_action().return_ok(7);
        mock.expect_get().return_ok(Counter { value: 7 });

        let client = mock.client();

        let value = client.perform_action(CounterAction::Add(7)).await.unwrap();
        assert_eq!(value, 7);

        let state = client.get().await.unwrap();
        assert_eq!(state, Counter { value: 7 });

        mock.verify();
    }
}
