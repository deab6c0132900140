//! # System Lifecycle
//!
//! Starting, wiring and stopping the coffee machine actor, plus log set-up.
//!
//! ## Start-up
//!
//! [`MachineSystem::start`] builds the ledger from [`MachineConfig`](crate::config::MachineConfig)
//! and spawns its actor. The returned system exposes a [`MachineClient`](crate::clients::MachineClient)
//! that can be cloned and passed to the menu.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor returns the ledger** - the final state comes back through the task handle
//!
//! Requests already queued are processed before the actor stops.

pub mod machine_system;
pub mod tracing;

pub use self::machine_system::*;
pub use self::tracing::*;
