//! Inventory-specific domain logic: how products merge and the errors the
//! front ends surface.

pub mod entity;
pub mod error;

pub use error::*;
