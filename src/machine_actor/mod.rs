//! # Coffee Machine Actor
//!
//! The ledger ([`CoffeeMachine`]) owned by a [`ResourceActor`], with the four machine
//! transactions expressed as [`MachineAction`]s.
//!
//! ## Structure
//!
//! - [`entity`] - ledger transactions and the [`ActorEntity`](crate::framework::ActorEntity) implementation
//! - [`validator`] - sufficiency checks run before a drink is made
//! - [`error`] - [`MachineError`]
//! - [`actions`] - [`MachineAction`] and [`MachineActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use coffee_machine::machine_actor;
//! use coffee_machine::model::{CoffeeMachine, Drink};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = machine_actor::new(CoffeeMachine::default(), 32);
//!     tokio::spawn(actor.run());
//!
//!     client.buy(Drink::Cappuccino).await?;
//!     assert_eq!(client.take().await?, 556);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod validator;

pub use actions::*;
pub use error::*;

use crate::clients::MachineClient;
use crate::framework::ResourceActor;
use crate::model::CoffeeMachine;

/// Creates a new machine actor owning `machine`, and its client.
pub fn new(machine: CoffeeMachine, buffer_size: usize) -> (ResourceActor<CoffeeMachine>, MachineClient) {
    let (actor, generic_client) = ResourceActor::new(machine, buffer_size);
    (actor, MachineClient::new(generic_client))
}
