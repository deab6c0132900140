//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a single entity and
//! processes requests against it sequentially.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns one entity.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`entity`) and
/// the receiver end of the channel. Requests are handled one at a time inside the
/// actor's task, so the state needs no `Mutex` and every action is atomic with
/// respect to every other request.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` with the initial state to get the `actor` and `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Stop**: Drop every client; `run()` returns the final state.
///
/// ```rust
/// use coffee_machine::framework::ResourceActor;
/// use coffee_machine::machine_actor::MachineAction;
/// use coffee_machine::model::{CoffeeMachine, Drink};
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::new(CoffeeMachine::default(), 10);
///     let handle = tokio::spawn(actor.run());
///
///     client.perform_action(MachineAction::Buy(Drink::Espresso)).await.unwrap();
///     drop(client);
///
///     let machine = handle.await.unwrap();
///     assert_eq!(machine.water(), 150);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    entity: T,
    handled: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `entity` - The initial state owned by the actor.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(entity: T, buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            entity,
            handled: 0,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client is dropped, then returns the final state.
    pub async fn run(mut self) -> T {
        // Extract just the type name (e.g., "CoffeeMachine" instead of the full path)
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handled += 1;
            match msg {
                ResourceRequest::Get { respond_to } => {
                    debug!(entity_type, "Get");
                    let _ = respond_to.send(Ok(self.entity.clone()));
                }
                ResourceRequest::Action { action, respond_to } => {
                    debug!(entity_type, ?action, "Action");
                    let result = self
                        .entity
                        .handle_action(action)
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, "Action ok"),
                        Err(e) => warn!(entity_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, handled = self.handled, "Shutdown");
        self.entity
    }
}
