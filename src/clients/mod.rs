//! Domain-facing clients wrapping the generic resource client.

pub mod inventory_client;

pub use inventory_client::*;
