//! Ordering core for a campus food stall.
//!
//! Two engines sit under the order service:
//!
//! - [`lifecycle`]: the order status table and the checks built on it
//! - [`clients::SlotClient`]: pickup slot capacity, safe under concurrent checkouts
//!
//! Both are hosted on [`actor_framework::ResourceActor`]s, which own their
//! records and apply one request at a time. [`app_system::OrderSystem`] wires
//! them together.

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod lifecycle;
pub mod order_actor;
pub mod slot_actor;

#[cfg(test)]
mod mock_framework;
