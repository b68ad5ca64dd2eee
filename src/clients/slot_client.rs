use tracing::{debug, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::domain::{TimeSlot, TimeSlotCreate, TimeSlotPatch};
use crate::slot_actor::{SlotAction, SlotActionResult, SlotError};

/// Client for the time slot actor.
///
/// Every reservation and release is applied by the actor one request at a
/// time, so concurrent checkouts for the same slot can never both take its
/// last seat.
#[derive(Clone)]
pub struct SlotClient {
    inner: ResourceClient<TimeSlot>,
}

impl_basic_client!(SlotClient, TimeSlot, String, SlotError, slot);

impl SlotClient {
    #[instrument(skip(self))]
    pub async fn provision_slot(&self, params: TimeSlotCreate) -> Result<String, SlotError> {
        debug!("Sending request");
        let id = self.inner.create(params).await?;
        info!(slot_id = %id, "Time slot provisioned");
        Ok(id)
    }

    /// All slots in display order.
    #[instrument(skip(self))]
    pub async fn list_slots(&self) -> Result<Vec<TimeSlot>, SlotError> {
        debug!("Sending request");
        let mut slots = self.inner.list().await?;
        slots.sort_by(|a, b| a.display_order.cmp(&b.display_order).then_with(|| a.id.cmp(&b.id)));
        Ok(slots)
    }

    /// Takes one seat and returns how many are left.
    ///
    /// # Errors
    /// `Full` when the slot has no seat left, `UnknownSlot` for an id that was
    /// never provisioned.
    #[instrument(skip(self))]
    pub async fn try_reserve(&self, id: String) -> Result<u32, SlotError> {
        debug!("Sending request");
        match self.inner.perform_action(id, SlotAction::TryReserve).await {
            Ok(SlotActionResult::Reserved { available }) => {
                debug!(available, "Seat reserved");
                Ok(available)
            }
            Ok(_) => Err(SlotError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// Gives one seat back and returns how many are available.
    #[instrument(skip(self))]
    pub async fn release(&self, id: String) -> Result<u32, SlotError> {
        debug!("Sending request");
        match self.inner.perform_action(id, SlotAction::Release).await {
            Ok(SlotActionResult::Released { available, clamped }) => {
                if clamped {
                    warn!(available, "Release ignored, slot already at capacity");
                } else {
                    debug!(available, "Seat released");
                }
                Ok(available)
            }
            Ok(_) => Err(SlotError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn resize_slot(&self, id: String, capacity: u32) -> Result<TimeSlot, SlotError> {
        debug!("Sending request");
        let patch = TimeSlotPatch { capacity: Some(capacity), ..Default::default() };
        Ok(self.inner.update(id, patch).await?)
    }
}
