//! # Coffee Machine
//!
//! > **A coffee vending machine: a resource ledger behind a text menu.**
//!
//! The machine holds water, milk, coffee beans, disposable cups and cash. An operator can
//! buy one of three drinks, refill supplies, take the cash, and print what is left.
//!
//! ## Design
//!
//! ### 1. The Ledger ([`model`], [`machine_actor`])
//! [`CoffeeMachine`](model::CoffeeMachine) holds five unsigned counters. Every purchase goes
//! through [`validate`](machine_actor::validator::validate) first, so a failed purchase
//! changes nothing and no counter can go below zero.
//!
//! ### 2. The Actor ([`framework`])
//! The ledger is owned by a single [`ResourceActor`](framework::ResourceActor) task. Requests
//! arrive over a channel and run one at a time, each to completion, so there are no locks
//! and no partially applied transactions.
//!
//! ### 3. The Interface ([`clients`])
//! [`MachineClient`](clients::MachineClient) wraps the generic client with one method per
//! transaction and returns the ledger's typed [`MachineError`](machine_actor::MachineError).
//!
//! ### 4. The Front End ([`menu`], [`lifecycle`])
//! [`Menu`](menu::Menu) reads commands from any `AsyncBufRead` and writes to any
//! `AsyncWrite`. [`MachineSystem`](lifecycle::MachineSystem) starts and stops the actor.
//!
//! ## Running
//!
//! ```bash
//! cargo run                    # interactive session on stdin/stdout
//! RUST_LOG=info cargo run      # with transaction logs on stderr
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod machine_actor;
pub mod menu;
pub mod model;
