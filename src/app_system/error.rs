use thiserror::Error;

use super::config::ConfigError;
use crate::order_actor::OrderError;
use crate::slot_actor::SlotError;

/// Failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
