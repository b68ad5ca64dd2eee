//! Runtime orchestration and lifecycle management.
//!
//! - [`OrderSystem`] starts the slot and order actors, provisions the
//!   configured pickup slots and shuts everything down again
//! - [`StallConfig`] is the TOML configuration
//! - [`setup_tracing`] initializes logging

pub mod config;
pub mod error;
pub mod order_system;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use order_system::*;
pub use self::tracing::*;
