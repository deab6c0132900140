use crate::clients::MachineClient;
use crate::config::MachineConfig;
use crate::machine_actor::MachineError;
use crate::model::CoffeeMachine;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runtime owner of the coffee machine actor.
///
/// `MachineSystem` is responsible for:
/// - **Start-up**: building the ledger from configuration and spawning its actor
/// - **Access**: handing out the [`MachineClient`]
/// - **Shutdown**: closing the channel and collecting the final ledger
///
/// # Example
///
/// ```rust
/// use coffee_machine::config::MachineConfig;
/// use coffee_machine::lifecycle::MachineSystem;
/// use coffee_machine::model::Drink;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = MachineSystem::start(&MachineConfig::default());
///     system.client.buy(Drink::Espresso).await?;
///
///     let machine = system.shutdown().await?;
///     assert_eq!(machine.cash(), 554);
///     Ok(())
/// }
/// ```
pub struct MachineSystem {
    /// Client for interacting with the machine actor
    pub client: MachineClient,

    /// Task running the actor; yields the final ledger
    handle: JoinHandle<CoffeeMachine>,
}

impl MachineSystem {
    /// Spawns the machine actor with the configured starting stock.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &MachineConfig) -> Self {
        let machine = CoffeeMachine::from(config.initial_stock);
        info!(stock = ?config.initial_stock, "Starting coffee machine");

        let (actor, client) = crate::machine_actor::new(machine, config.channel_capacity);
        let handle = tokio::spawn(actor.run());

        Self { client, handle }
    }

    /// Gracefully shuts down the actor and returns the final ledger.
    ///
    /// The actor stops once every [`MachineClient`] clone is gone, so callers must drop
    /// the clones they handed out before awaiting this.
    pub async fn shutdown(self) -> Result<CoffeeMachine, MachineError> {
        info!("Shutting down coffee machine...");

        // Dropping the last sender makes the actor's `recv()` return `None`.
        drop(self.client);

        match self.handle.await {
            Ok(machine) => {
                info!(cash = machine.cash(), "Shutdown complete");
                Ok(machine)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(MachineError::ActorCommunication(format!(
                    "Actor task failed: {e}"
                )))
            }
        }
    }
}
