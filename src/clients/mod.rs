//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod machine_client;

pub use actor_client::*;
pub use machine_client::*;
