//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a piece of state must satisfy to be owned by
//! a [`ResourceActor`](crate::framework::ResourceActor). It names the action and result types
//! the actor accepts and the error type it reports.
//!
//! Action handling is synchronous: the actor runs each action to completion before it looks at
//! the next request, so an action either applies fully or not at all.

use std::fmt::Debug;

/// Trait that any state must implement to be managed by `ResourceActor`.
///
/// # Error Granularity
/// One error enum per entity rather than one per action. A `Buy` and a `Take` share
/// `MachineError` even though `Take` never fails.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Enum representing the operations the entity supports (e.g. `Buy`, `Fill`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Handle one action against the entity.
    ///
    /// Implementations must leave `self` untouched when they return `Err`.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
