//! Interactive coffee machine on stdin/stdout.
//!
//! Logs go to stderr; see [`setup_tracing`].

use coffee_machine::config::MachineConfig;
use coffee_machine::lifecycle::{setup_tracing, MachineSystem};
use coffee_machine::menu::Menu;
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = MachineConfig::default();
    let system = MachineSystem::start(&config);

    let menu = Menu::new(
        BufReader::new(stdin()),
        stdout(),
        system.client.clone(),
        config.fill_policy,
    );
    menu.run().await?;

    let machine = system.shutdown().await?;
    info!(
        water = machine.water(),
        milk = machine.milk(),
        beans = machine.beans(),
        cups = machine.cups(),
        cash = machine.cash(),
        "Final stock"
    );
    Ok(())
}
