//! Error type for the text menu.

use crate::machine_actor::MachineError;
use thiserror::Error;

/// Errors that can end or interrupt a menu session.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Reading input or writing output failed.
    #[error("Menu I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Machine(#[from] MachineError),
}
