//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` fmt subscriber for the whole process.
//!
//! Logs go to **stderr**: stdout carries the operator dialogue and must stay exactly as
//! the menu writes it. The filter comes from `RUST_LOG` and defaults to `warn`, which
//! keeps an interactive session quiet apart from lenient fill fallbacks.
//!
//! ```bash
//! RUST_LOG=info cargo run      # actor start/stop, every transaction outcome
//! RUST_LOG=debug cargo run     # full action payloads
//! ```
//!
//! With `RUST_LOG=debug` a purchase shows up as:
//!
//! ```text
//! DEBUG buy{drink=Latte}: Sending request
//! DEBUG Action entity_type="CoffeeMachine" action=Buy(Latte)
//! DEBUG Drink made drink=Latte water=50 cups=8
//!  INFO Action ok entity_type="CoffeeMachine"
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
