//! Machine configuration.
//!
//! Built in code; there is no file or environment loading. Every field has a default, so
//! a partial document deserializes cleanly.

use crate::model::Inventory;
use serde::{Deserialize, Serialize};

/// What the fill dialogue does with a value that is not an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillPolicy {
    /// Treat the value as zero and keep going.
    #[default]
    Lenient,
    /// Report `expected integer` and abandon the whole fill.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Ledger contents at start-up.
    pub initial_stock: Inventory,
    /// Capacity of the actor's request channel.
    pub channel_capacity: usize,
    pub fill_policy: FillPolicy,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            initial_stock: Inventory::default(),
            channel_capacity: default_channel_capacity(),
            fill_policy: FillPolicy::default(),
        }
    }
}

fn default_channel_capacity() -> usize {
    32
}
