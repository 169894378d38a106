pub mod product;
pub mod inventory;

pub use product::*;
pub use inventory::*;
