//! The main menu loop.

use super::input::LineReader;
use super::MenuError;
use crate::clients::MachineClient;
use crate::config::FillPolicy;
use crate::machine_actor::MachineError;
use crate::model::{Drink, FillRequest};
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

pub const MAIN_PROMPT: &str = "Write action (buy, fill, take, remaining, exit): ";
pub const BUY_PROMPT: &str =
    "What do you want to buy? 1 - espresso, 2 - latte, 3 - cappuccino, back - to main menu: ";
pub const MAKING_COFFEE: &str = "I have enough resources, making you a coffee!";
pub const FILL_PROMPTS: [&str; 4] = [
    "Write how many ml of water you want to add: ",
    "Write how many ml of milk you want to add: ",
    "Write how many grams of coffee beans you want to add: ",
    "Write how many disposable cups you want to add: ",
];

/// A main-menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Buy,
    Fill,
    Take,
    Remaining,
    Exit,
}

impl FromStr for MenuCommand {
    type Err = MachineError;

    /// Commands are case-sensitive and must match exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(MenuCommand::Buy),
            "fill" => Ok(MenuCommand::Fill),
            "take" => Ok(MenuCommand::Take),
            "remaining" => Ok(MenuCommand::Remaining),
            "exit" => Ok(MenuCommand::Exit),
            _ => Err(MachineError::WrongInput),
        }
    }
}

/// Text front end for a coffee machine.
///
/// Generic over the input provider `R` and output sink `W`, so the binary runs it on
/// stdin/stdout and tests run it on byte buffers.
pub struct Menu<R, W> {
    input: LineReader<R>,
    output: W,
    client: MachineClient,
    fill_policy: FillPolicy,
}

impl<R, W> Menu<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W, client: MachineClient, fill_policy: FillPolicy) -> Self {
        Self {
            input: LineReader::new(input),
            output,
            client,
            fill_policy,
        }
    }

    /// Runs the session until `exit` or end of input, then hands back the output sink.
    ///
    /// Operator mistakes and shortages are printed and the loop continues. Only I/O
    /// failures and a lost machine actor end the session with an error.
    pub async fn run(mut self) -> Result<W, MenuError> {
        info!("Menu session started");
        loop {
            self.say(MAIN_PROMPT).await?;
            let Some(token) = self.input.read_token().await? else {
                info!("Input closed");
                break;
            };

            let command = match token.parse::<MenuCommand>() {
                Ok(MenuCommand::Exit) => break,
                Ok(command) => command,
                Err(e) => {
                    debug!(%token, "Unknown command");
                    self.say(&e.to_string()).await?;
                    self.say("").await?;
                    continue;
                }
            };

            self.dispatch(command).await?;
            self.say("").await?;
        }
        info!("Menu session ended");
        Ok(self.output)
    }

    async fn dispatch(&mut self, command: MenuCommand) -> Result<(), MenuError> {
        let outcome = match command {
            MenuCommand::Buy => self.buy().await,
            MenuCommand::Fill => self.fill().await,
            MenuCommand::Take => self.take().await,
            MenuCommand::Remaining => self.remaining().await,
            MenuCommand::Exit => Ok(()),
        };
        match outcome {
            Err(MenuError::Machine(e)) if e.is_recoverable() => self.say(&e.to_string()).await,
            other => other,
        }
    }

    async fn buy(&mut self) -> Result<(), MenuError> {
        self.say(BUY_PROMPT).await?;
        let choice = self.input.read_token().await?.unwrap_or_default();
        let Some(drink) = Drink::from_menu_choice(&choice) else {
            debug!(%choice, "Back to main menu");
            return Ok(());
        };
        self.client.buy(drink).await?;
        self.say(MAKING_COFFEE).await
    }

    /// Asks for all four amounts before deciding, so a bad value never leaves the
    /// remaining answers to be read as menu commands.
    async fn fill(&mut self) -> Result<(), MenuError> {
        let mut amounts = [0u32; 4];
        let mut rejected = false;
        for (amount, prompt) in amounts.iter_mut().zip(FILL_PROMPTS) {
            self.say(prompt).await?;
            match self.input.read_int().await {
                Ok(value) => *amount = value,
                Err(MenuError::Machine(MachineError::ExpectedInteger)) => {
                    warn!(prompt, policy = ?self.fill_policy, "Fill amount is not an integer");
                    rejected = true;
                }
                Err(e) => return Err(e),
            }
        }
        if rejected && self.fill_policy == FillPolicy::Strict {
            return Err(MachineError::ExpectedInteger.into());
        }

        let [water, milk, beans, cups] = amounts;
        self.client
            .fill(FillRequest::new(water, milk, beans, cups))
            .await?;
        Ok(())
    }

    async fn take(&mut self) -> Result<(), MenuError> {
        let cash = self.client.take().await?;
        self.say(&format!("I gave you ${cash}")).await
    }

    async fn remaining(&mut self) -> Result<(), MenuError> {
        let inventory = self.client.remaining().await?;
        self.say(&inventory.to_string()).await
    }

    async fn say(&mut self, text: &str) -> Result<(), MenuError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }
}
