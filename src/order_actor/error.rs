use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::UnknownStatus;
use crate::lifecycle::InvalidTransition;
use crate::slot_actor::SlotError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),
    #[error("Time slot unavailable: {0}")]
    SlotUnavailable(String),
    #[error("Unknown time slot: {0}")]
    UnknownSlot(String),
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<UnknownStatus> for OrderError {
    fn from(err: UnknownStatus) -> Self {
        OrderError::UnknownStatus(err.0)
    }
}

impl From<SlotError> for OrderError {
    fn from(err: SlotError) -> Self {
        match err {
            SlotError::Full(id) => OrderError::SlotUnavailable(id),
            SlotError::UnknownSlot(id) => OrderError::UnknownSlot(id),
            SlotError::InvalidCapacity(msg) => OrderError::ValidationError(msg),
            SlotError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
        }
    }
}

impl From<FrameworkError<OrderError>> for OrderError {
    fn from(err: FrameworkError<OrderError>) -> Self {
        match err {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Entity(e) => e,
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
