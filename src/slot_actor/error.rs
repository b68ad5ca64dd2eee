use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during time slot operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SlotError {
    #[error("Time slot is full: {0}")]
    Full(String),
    #[error("Unknown time slot: {0}")]
    UnknownSlot(String),
    #[error("Invalid slot capacity: {0}")]
    InvalidCapacity(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<SlotError>> for SlotError {
    fn from(err: FrameworkError<SlotError>) -> Self {
        match err {
            FrameworkError::NotFound(id) => SlotError::UnknownSlot(id),
            FrameworkError::Entity(e) => e,
            other => SlotError::ActorCommunicationError(other.to_string()),
        }
    }
}
