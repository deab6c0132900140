use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const STARTING_WATER: u32 = 400;
pub const STARTING_MILK: u32 = 540;
pub const STARTING_BEANS: u32 = 120;
pub const STARTING_CUPS: u32 = 9;
pub const STARTING_CASH: u32 = 550;

/// The resource ledger of a coffee machine.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be owned by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for CoffeeMachine`](#impl-ActorEntity-for-CoffeeMachine) for details on:
/// - Transactions ([`MachineAction`](crate::machine_actor::MachineAction))
/// - Transaction results ([`MachineActionResult`](crate::machine_actor::MachineActionResult))
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoffeeMachine {
    pub(crate) water: u32,
    pub(crate) milk: u32,
    pub(crate) beans: u32,
    pub(crate) cups: u32,
    pub(crate) cash: u32,
}

impl CoffeeMachine {
    /// Creates a ledger holding the given amounts.
    ///
    /// # Arguments
    /// * `water` - Water in ml
    /// * `milk` - Milk in ml
    /// * `beans` - Coffee beans in grams
    /// * `cups` - Disposable cups
    /// * `cash` - Money collected so far
    pub fn new(water: u32, milk: u32, beans: u32, cups: u32, cash: u32) -> Self {
        Self {
            water,
            milk,
            beans,
            cups,
            cash,
        }
    }

    pub fn water(&self) -> u32 {
        self.water
    }

    pub fn milk(&self) -> u32 {
        self.milk
    }

    pub fn beans(&self) -> u32 {
        self.beans
    }

    pub fn cups(&self) -> u32 {
        self.cups
    }

    pub fn cash(&self) -> u32 {
        self.cash
    }

    /// Read-only copy of all five counters.
    pub fn report(&self) -> Inventory {
        Inventory {
            water: self.water,
            milk: self.milk,
            beans: self.beans,
            cups: self.cups,
            cash: self.cash,
        }
    }
}

impl Default for CoffeeMachine {
    fn default() -> Self {
        Self::new(
            STARTING_WATER,
            STARTING_MILK,
            STARTING_BEANS,
            STARTING_CUPS,
            STARTING_CASH,
        )
    }
}

impl From<Inventory> for CoffeeMachine {
    fn from(stock: Inventory) -> Self {
        Self::new(stock.water, stock.milk, stock.beans, stock.cups, stock.cash)
    }
}

impl Display for CoffeeMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.report().fmt(f)
    }
}

/// Snapshot of the ledger counters, also used to configure the starting stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub water: u32,
    pub milk: u32,
    pub beans: u32,
    pub cups: u32,
    pub cash: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        CoffeeMachine::default().report()
    }
}

impl Display for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The coffee machine has:\n\
             {} ml of water\n\
             {} ml of milk\n\
             {} g of coffee beans\n\
             {} disposable cups\n\
             ${} of money",
            self.water, self.milk, self.beans, self.cups, self.cash
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_machine_has_starting_stock() {
        let machine = CoffeeMachine::default();
        assert_eq!(machine, CoffeeMachine::new(400, 540, 120, 9, 550));
    }

    #[test]
    fn test_report_format() {
        let machine = CoffeeMachine::new(150, 540, 104, 8, 554);
        assert_eq!(
            machine.report().to_string(),
            "The coffee machine has:\n\
             150 ml of water\n\
             540 ml of milk\n\
             104 g of coffee beans\n\
             8 disposable cups\n\
             $554 of money"
        );
    }

    #[test]
    fn test_inventory_round_trips_into_machine() {
        let stock = Inventory {
            water: 1,
            milk: 2,
            beans: 3,
            cups: 4,
            cash: 5,
        };
        assert_eq!(CoffeeMachine::from(stock).report(), stock);
    }
}
