//! Pure data structures: the ledger, the recipe catalog and fill requests.

pub mod fill;
pub mod ledger;
pub mod recipe;

pub use fill::*;
pub use ledger::*;
pub use recipe::*;
