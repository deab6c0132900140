//! Error types for the coffee machine actor.

use thiserror::Error;

/// Errors that can occur while operating the coffee machine.
///
/// The `NotEnough*` variants are raised by the transaction validator before any counter
/// is touched. Their display text is what the operator sees.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// The main-menu command was not recognized.
    #[error("Wrong input. Please enter one of the available options")]
    WrongInput,

    /// A value that should have been a non-negative integer was not.
    #[error("expected integer")]
    ExpectedInteger,

    #[error("Sorry, not enough water!")]
    NotEnoughWater,

    #[error("Sorry, not enough milk!")]
    NotEnoughMilk,

    #[error("Sorry, not enough beans!")]
    NotEnoughBeans,

    #[error("Sorry, not enough cups!")]
    NotEnoughCups,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl MachineError {
    /// Whether the operator can simply carry on after seeing this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, MachineError::ActorCommunication(_))
    }
}

/// Free-form failures from the client layer are communication errors.
impl From<String> for MachineError {
    fn from(msg: String) -> Self {
        MachineError::ActorCommunication(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_becomes_communication_error() {
        let err: MachineError = "reply lost".to_string().into();
        assert_eq!(err, MachineError::ActorCommunication("reply lost".to_string()));
        assert!(!err.is_recoverable());
        assert!(MachineError::NotEnoughCups.is_recoverable());
    }
}
