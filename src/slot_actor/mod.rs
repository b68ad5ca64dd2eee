//! Time-slot capacity: reserving and releasing pickup seats.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
