//! Ledger transactions and the [`ActorEntity`] implementation for [`CoffeeMachine`].
//!
//! Every transaction is a plain synchronous method, so the ledger can be used directly in
//! tests or owned by a [`ResourceActor`](crate::framework::ResourceActor).

use super::actions::{MachineAction, MachineActionResult};
use super::validator::{validate, CUPS_PER_DRINK};
use super::MachineError;
use crate::framework::ActorEntity;
use crate::model::{CoffeeMachine, FillRequest, Recipe};
use tracing::debug;

impl CoffeeMachine {
    /// Makes one drink.
    ///
    /// On a shortage the error names the first missing resource and no counter changes.
    pub fn buy(&mut self, recipe: &Recipe) -> Result<(), MachineError> {
        validate(self, recipe)?;
        self.water -= recipe.water;
        self.milk -= recipe.milk;
        self.beans -= recipe.beans;
        self.cups -= CUPS_PER_DRINK;
        self.cash = self.cash.saturating_add(recipe.cost);
        Ok(())
    }

    /// Adds supplies. There is no capacity limit; counters saturate at `u32::MAX`.
    pub fn fill(&mut self, request: &FillRequest) {
        self.water = self.water.saturating_add(request.water);
        self.milk = self.milk.saturating_add(request.milk);
        self.beans = self.beans.saturating_add(request.beans);
        self.cups = self.cups.saturating_add(request.cups);
    }

    /// Hands out all collected cash.
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.cash)
    }
}

impl ActorEntity for CoffeeMachine {
    type Action = MachineAction;
    type ActionResult = MachineActionResult;
    type Error = MachineError;

    /// # Actions
    /// - `Buy`: Validates, then consumes the drink's resources and one cup
    /// - `Fill`: Adds the requested supplies
    /// - `Take`: Returns the cash and resets it to zero
    /// - `Report`: Returns a snapshot of all counters
    fn handle_action(&mut self, action: MachineAction) -> Result<MachineActionResult, MachineError> {
        match action {
            MachineAction::Buy(drink) => {
                self.buy(&drink.recipe())?;
                debug!(?drink, water = self.water, cups = self.cups, "Drink made");
                Ok(MachineActionResult::Buy(drink))
            }
            MachineAction::Fill(request) => {
                self.fill(&request);
                Ok(MachineActionResult::Fill(()))
            }
            MachineAction::Take => Ok(MachineActionResult::Take(self.take())),
            MachineAction::Report => Ok(MachineActionResult::Report(self.report())),
        }
    }
}
