//! # Machine Client
//!
//! High-level API for the coffee machine actor. Wraps a `ResourceClient<CoffeeMachine>`
//! and turns the generic action round-trip into one method per transaction.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::machine_actor::{MachineAction, MachineActionResult, MachineError};
use crate::model::{CoffeeMachine, Drink, FillRequest, Inventory};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the coffee machine actor.
#[derive(Clone)]
pub struct MachineClient {
    inner: ResourceClient<CoffeeMachine>,
}

impl MachineClient {
    pub fn new(inner: ResourceClient<CoffeeMachine>) -> Self {
        Self { inner }
    }

    /// Makes a drink. Fails with the first shortage and leaves the machine untouched.
    #[instrument(skip(self))]
    pub async fn buy(&self, drink: Drink) -> Result<(), MachineError> {
        debug!("Sending request");
        match self.send(MachineAction::Buy(drink)).await? {
            MachineActionResult::Buy(_) => Ok(()),
            other => Err(unexpected("Buy", &other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn fill(&self, request: FillRequest) -> Result<(), MachineError> {
        debug!("Sending request");
        match self.send(MachineAction::Fill(request)).await? {
            MachineActionResult::Fill(()) => Ok(()),
            other => Err(unexpected("Fill", &other)),
        }
    }

    /// Collects the cash. Returns the amount handed out.
    #[instrument(skip(self))]
    pub async fn take(&self) -> Result<u32, MachineError> {
        debug!("Sending request");
        match self.send(MachineAction::Take).await? {
            MachineActionResult::Take(cash) => Ok(cash),
            other => Err(unexpected("Take", &other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remaining(&self) -> Result<Inventory, MachineError> {
        debug!("Sending request");
        match self.send(MachineAction::Report).await? {
            MachineActionResult::Report(inventory) => Ok(inventory),
            other => Err(unexpected("Report", &other)),
        }
    }

    async fn send(&self, action: MachineAction) -> Result<MachineActionResult, MachineError> {
        self.inner
            .perform_action(action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(action: &str, result: &MachineActionResult) -> MachineError {
    format!("{action} answered with {result:?}").into()
}

#[async_trait]
impl ActorClient<CoffeeMachine> for MachineClient {
    type Error = MachineError;

    fn inner(&self) -> &ResourceClient<CoffeeMachine> {
        &self.inner
    }

    /// Recovers the typed [`MachineError`] raised by the ledger; anything else is a
    /// communication failure.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<MachineError>() {
                Ok(err) => *err,
                Err(other) => MachineError::ActorCommunication(other.to_string()),
            },
            other => MachineError::ActorCommunication(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_get, MockClient};

    #[tokio::test]
    async fn test_buy_sends_drink() {
        let (client, mut receiver) = create_mock_client::<CoffeeMachine>(10);
        let machine_client = MachineClient::new(client);

        let buy_task = tokio::spawn(async move { machine_client.buy(Drink::Latte).await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, MachineAction::Buy(Drink::Latte)));

        responder
            .send(Ok(MachineActionResult::Buy(Drink::Latte)))
            .unwrap();

        assert_eq!(buy_task.await.unwrap(), Ok(()));
    }

    #[tokio::test]
    async fn test_shortage_is_recovered_as_typed_error() {
        let (client, mut receiver) = create_mock_client::<CoffeeMachine>(10);
        let machine_client = MachineClient::new(client);

        let buy_task = tokio::spawn(async move { machine_client.buy(Drink::Espresso).await });

        let (_, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                MachineError::NotEnoughBeans,
            ))))
            .unwrap();

        assert_eq!(buy_task.await.unwrap(), Err(MachineError::NotEnoughBeans));
    }

    #[tokio::test]
    async fn test_foreign_entity_error_becomes_communication_error() {
        let mut mock = MockClient::<CoffeeMachine>::new();
        mock.expect_action().return_err(FrameworkError::EntityError(Box::new(
            std::io::Error::other("disk on fire"),
        )));

        let result = MachineClient::new(mock.client()).take().await;
        match result {
            Err(MachineError::ActorCommunication(msg)) => assert!(msg.contains("disk on fire")),
            other => panic!("Expected ActorCommunication, got {:?}", other),
        }
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor() {
        let (client, receiver) = create_mock_client::<CoffeeMachine>(1);
        drop(receiver);

        let result = MachineClient::new(client).remaining().await;
        assert_eq!(
            result,
            Err(MachineError::ActorCommunication("Actor closed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_mismatched_result_is_rejected() {
        let mut mock = MockClient::<CoffeeMachine>::new();
        mock.expect_action().return_ok(MachineActionResult::Take(3));

        let result = MachineClient::new(mock.client()).fill(FillRequest::default()).await;
        assert_eq!(
            result,
            Err(MachineError::ActorCommunication(
                "Fill answered with Take(3)".to_string()
            ))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_state_reads_full_ledger() {
        let (client, mut receiver) = create_mock_client::<CoffeeMachine>(10);
        let machine_client = MachineClient::new(client);

        let state_task = tokio::spawn(async move { machine_client.state().await });

        let responder = expect_get(&mut receiver).await.expect("Expected Get request");
        responder.send(Ok(CoffeeMachine::default())).unwrap();

        assert_eq!(state_task.await.unwrap(), Ok(CoffeeMachine::default()));
    }
}
