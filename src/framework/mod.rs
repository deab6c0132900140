//! Generic actor framework for owning a piece of state.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that state types implement to be managed by an actor
//! - [`ResourceActor`] - Generic actor that owns the state and serves requests
//! - [`ResourceClient`] - Typed, cloneable handle for sending requests
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
