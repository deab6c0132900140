//! # Generic Messages
//!
//! Messages exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// - **Get**: returns a copy of the current state.
/// - **Action**: runs one [`ActorEntity::Action`] against the state.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Get {
        respond_to: Response<T>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
