//! Transactions accepted by the coffee machine actor.
//!
//! These are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! on [`CoffeeMachine`](crate::model::CoffeeMachine).

use crate::model::{Drink, FillRequest, Inventory};

/// Operations that can be performed on the machine ledger.
#[derive(Debug, Clone)]
pub enum MachineAction {
    /// Makes one drink, if every resource it needs is available.
    ///
    /// # Errors
    /// Fails with the first shortage found (water, milk, beans, cups) and changes nothing.
    Buy(Drink),
    /// Adds supplies. Never fails.
    Fill(FillRequest),
    /// Empties the cash box.
    Take,
    /// Reads all counters without modifying them.
    Report,
}

/// Results from MachineActions - variants match 1:1 with MachineAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineActionResult {
    /// The drink that was made
    Buy(Drink),
    Fill(()),
    /// The amount of cash handed out
    Take(u32),
    Report(Inventory),
}
