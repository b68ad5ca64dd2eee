use tracing::{info, error};
use crate::clients::{OrderClient, SlotClient};
use crate::actor_framework::ResourceActor;
use crate::domain::{Order, TimeSlot};
use super::config::{StallConfig, SystemSettings};
use super::error::SystemError;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct OrderSystem {
    pub order_client: OrderClient,
    pub slot_client: SlotClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    pub fn new(settings: &SystemSettings) -> Self {
        // 1. Setup Time Slot Service
        let slot_id_counter = Arc::new(AtomicU64::new(1));
        let next_slot_id = move || {
            let id = slot_id_counter.fetch_add(1, Ordering::SeqCst);
            format!("slot_{}", id)
        };

        let (slot_actor, slot_resource_client) =
            ResourceActor::<TimeSlot>::new(settings.actor_buffer_size, next_slot_id);
        let slot_client = SlotClient::new(slot_resource_client);
        let slot_handle = tokio::spawn(slot_actor.run());

        // 2. Setup Order Service; ids double as the call number counter
        let order_id_counter = Arc::new(AtomicU64::new(settings.order_sequence_start));
        let next_order_id = move || order_id_counter.fetch_add(1, Ordering::SeqCst);

        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(settings.actor_buffer_size, next_order_id);
        let order_client = OrderClient::new(order_resource_client, slot_client.clone());
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            order_client,
            slot_client,
            handles: vec![slot_handle, order_handle],
        }
    }

    /// Starts the actors and provisions every configured time slot.
    pub async fn start(config: &StallConfig) -> Result<Self, SystemError> {
        info!(slots = config.slots.len(), "Starting order system");
        let system = Self::new(&config.system);
        for params in config.slot_params() {
            system.slot_client.provision_slot(params).await?;
        }
        Ok(system)
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        // Actors stop once every client (and so every sender) is gone.
        drop(self.order_client);
        drop(self.slot_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
