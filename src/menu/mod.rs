//! # Text Menu
//!
//! The operator dialogue: prompts, command tokens, and dispatch to the
//! [`MachineClient`](crate::clients::MachineClient).
//!
//! The menu only formats and routes. Every ledger rule lives in
//! [`machine_actor`](crate::machine_actor).
//!
//! ```rust
//! use coffee_machine::config::{FillPolicy, MachineConfig};
//! use coffee_machine::lifecycle::MachineSystem;
//! use coffee_machine::menu::Menu;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = MachineSystem::start(&MachineConfig::default());
//!
//!     let script = "buy\n3\ntake\nexit\n";
//!     let menu = Menu::new(script.as_bytes(), Vec::new(), system.client.clone(), FillPolicy::Lenient);
//!     let transcript = String::from_utf8(menu.run().await?)?;
//!     assert!(transcript.contains("I gave you $556"));
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod controller;
pub mod error;
pub mod input;

pub use controller::*;
pub use error::*;
pub use input::*;
