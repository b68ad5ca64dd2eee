//! Typed clients over the resource actors.
//!
//! - [`SlotClient`] is the time-slot capacity allocator.
//! - [`OrderClient`] is the order service: checkout, payment callbacks and
//!   status changes, composing the slot allocator with the order lifecycle.

#[macro_use]
mod macros;
pub mod order_client;
pub mod slot_client;

pub use order_client::*;
pub use slot_client::*;
