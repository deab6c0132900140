//! Sufficiency checks run before any ledger mutation.

use super::MachineError;
use crate::model::{CoffeeMachine, Recipe};

/// Cups consumed by every drink.
pub const CUPS_PER_DRINK: u32 = 1;

/// Checks whether `machine` holds enough of everything `recipe` needs.
///
/// Water, milk, beans and cups are checked in that order and the first shortage is
/// returned, so a machine that is out of both water and milk reports water.
pub fn validate(machine: &CoffeeMachine, recipe: &Recipe) -> Result<(), MachineError> {
    if machine.water < recipe.water {
        Err(MachineError::NotEnoughWater)
    } else if machine.milk < recipe.milk {
        Err(MachineError::NotEnoughMilk)
    } else if machine.beans < recipe.beans {
        Err(MachineError::NotEnoughBeans)
    } else if machine.cups < CUPS_PER_DRINK {
        Err(MachineError::NotEnoughCups)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sufficient_resources_pass() {
        let machine = CoffeeMachine::default();
        assert_eq!(validate(&machine, &Recipe::LATTE), Ok(()));
    }

    #[test]
    fn test_exact_amounts_pass() {
        let machine = CoffeeMachine::new(250, 0, 16, 1, 0);
        assert_eq!(validate(&machine, &Recipe::ESPRESSO), Ok(()));
    }

    #[test]
    fn test_each_shortage_is_reported() {
        let recipe = Recipe::new(250, 75, 16, 4);
        let cases = [
            (CoffeeMachine::new(0, 540, 120, 9, 550), MachineError::NotEnoughWater),
            (CoffeeMachine::new(500, 0, 120, 9, 550), MachineError::NotEnoughMilk),
            (CoffeeMachine::new(500, 100, 0, 9, 550), MachineError::NotEnoughBeans),
            (CoffeeMachine::new(500, 100, 100, 0, 550), MachineError::NotEnoughCups),
        ];
        for (machine, expected) in cases {
            assert_eq!(validate(&machine, &recipe), Err(expected));
        }
    }

    #[test]
    fn test_water_is_checked_before_everything_else() {
        let empty = CoffeeMachine::new(0, 0, 0, 0, 0);
        assert_eq!(
            validate(&empty, &Recipe::CAPPUCCINO),
            Err(MachineError::NotEnoughWater)
        );

        let no_milk_no_cups = CoffeeMachine::new(400, 0, 120, 0, 0);
        assert_eq!(
            validate(&no_milk_no_cups, &Recipe::LATTE),
            Err(MachineError::NotEnoughMilk)
        );
    }
}
