use coffee_machine::clients::ActorClient;
use coffee_machine::config::{FillPolicy, MachineConfig};
use coffee_machine::lifecycle::MachineSystem;
use coffee_machine::machine_actor::MachineError;
use coffee_machine::menu::{Menu, BUY_PROMPT, FILL_PROMPTS, MAIN_PROMPT, MAKING_COFFEE};
use coffee_machine::model::{CoffeeMachine, Drink, FillRequest, Inventory};

/// Full end-to-end test: a scripted operator session against the real actor.
#[tokio::test]
async fn test_full_menu_session() {
    let system = MachineSystem::start(&MachineConfig::default());

    let script = "\
remaining
buy
2
buy
2
fill
1000
0
0
0
buy
1
take
exit
";
    let menu = Menu::new(
        script.as_bytes(),
        Vec::new(),
        system.client.clone(),
        FillPolicy::Lenient,
    );
    let transcript = String::from_utf8(menu.run().await.expect("Session failed")).unwrap();

    let report = "The coffee machine has:\n\
                  400 ml of water\n\
                  540 ml of milk\n\
                  120 g of coffee beans\n\
                  9 disposable cups\n\
                  $550 of money";
    let [water, milk, beans, cups] = FILL_PROMPTS;
    let expected = [
        MAIN_PROMPT,
        report,
        "",
        MAIN_PROMPT,
        BUY_PROMPT,
        MAKING_COFFEE,
        "",
        MAIN_PROMPT,
        BUY_PROMPT,
        "Sorry, not enough water!",
        "",
        MAIN_PROMPT,
        water,
        milk,
        beans,
        cups,
        "",
        MAIN_PROMPT,
        BUY_PROMPT,
        MAKING_COFFEE,
        "",
        MAIN_PROMPT,
        "I gave you $561",
        "",
        MAIN_PROMPT,
    ]
    .map(|line| format!("{line}\n"))
    .concat();
    assert_eq!(transcript, expected);

    let machine = system.shutdown().await.expect("Failed to shutdown system");
    assert_eq!(machine, CoffeeMachine::new(800, 465, 84, 7, 0));
}

/// The client API against the real actor, without the menu.
#[tokio::test]
async fn test_client_transactions() {
    let system = MachineSystem::start(&MachineConfig::default());
    let client = &system.client;

    assert_eq!(
        client.remaining().await.unwrap(),
        Inventory {
            water: 400,
            milk: 540,
            beans: 120,
            cups: 9,
            cash: 550,
        }
    );

    client.buy(Drink::Espresso).await.expect("Espresso should succeed");
    assert_eq!(
        client.state().await.unwrap(),
        CoffeeMachine::new(150, 540, 104, 8, 554)
    );

    // Not enough water for a latte now; nothing may change.
    assert_eq!(
        client.buy(Drink::Latte).await,
        Err(MachineError::NotEnoughWater)
    );
    assert_eq!(
        client.state().await.unwrap(),
        CoffeeMachine::new(150, 540, 104, 8, 554)
    );

    client.fill(FillRequest::new(500, 0, 0, 2)).await.unwrap();
    client.buy(Drink::Latte).await.expect("Latte should succeed after refill");

    assert_eq!(client.take().await.unwrap(), 561);
    assert_eq!(client.take().await.unwrap(), 0);

    let machine = system.shutdown().await.unwrap();
    assert_eq!(machine, CoffeeMachine::new(300, 465, 84, 9, 0));
}

/// A configured starting stock replaces the defaults.
#[tokio::test]
async fn test_configured_initial_stock() {
    let config = MachineConfig {
        initial_stock: Inventory {
            water: 0,
            milk: 540,
            beans: 120,
            cups: 9,
            cash: 550,
        },
        ..MachineConfig::default()
    };
    let system = MachineSystem::start(&config);

    assert_eq!(
        system.client.buy(Drink::Espresso).await,
        Err(MachineError::NotEnoughWater)
    );

    let machine = system.shutdown().await.unwrap();
    assert_eq!(machine, CoffeeMachine::new(0, 540, 120, 9, 550));
}
