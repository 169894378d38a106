use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur while a front end drives the inventory.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Unknown action: {0}")]
    UnknownAction(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<std::io::Error> for InventoryError {
    fn from(e: std::io::Error) -> Self {
        InventoryError::Io(e.to_string())
    }
}

impl From<FrameworkError> for InventoryError {
    fn from(e: FrameworkError) -> Self {
        InventoryError::ActorCommunicationError(e.to_string())
    }
}
