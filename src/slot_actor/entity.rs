use crate::actor_framework::Entity;
use crate::domain::{TimeSlot, TimeSlotCreate, TimeSlotPatch};
use super::actions::{SlotAction, SlotActionResult};
use super::error::SlotError;

impl Entity for TimeSlot {
    type Id = String;
    type CreateParams = TimeSlotCreate;
    type Patch = TimeSlotPatch;
    type Action = SlotAction;
    type ActionResult = SlotActionResult;
    type Error = SlotError;

    fn id(&self) -> &String { &self.id }

    /// Provisions a slot, starting full of free seats unless `available` says otherwise.
    ///
    /// # Errors
    /// Returns `InvalidCapacity` if `available` exceeds `capacity`.
    fn from_create(id: String, params: TimeSlotCreate) -> Result<Self, SlotError> {
        let available = params.available.unwrap_or(params.capacity);
        if available > params.capacity {
            return Err(SlotError::InvalidCapacity(format!(
                "{}: available {} exceeds capacity {}",
                params.label, available, params.capacity
            )));
        }
        Ok(Self {
            id,
            label: params.label,
            capacity: params.capacity,
            available,
            display_order: params.display_order,
        })
    }

    /// Relabels or resizes the slot.
    ///
    /// Resizing keeps the seats already reserved, so the new capacity may not
    /// drop below them.
    fn on_update(&mut self, patch: TimeSlotPatch) -> Result<(), SlotError> {
        if let Some(capacity) = patch.capacity {
            let reserved = self.reserved();
            if capacity < reserved {
                return Err(SlotError::InvalidCapacity(format!(
                    "{}: capacity {} is below the {} seats already reserved",
                    self.id, capacity, reserved
                )));
            }
            self.capacity = capacity;
            self.available = capacity - reserved;
        }
        if let Some(label) = patch.label {
            self.label = label;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: SlotAction) -> Result<SlotActionResult, SlotError> {
        match action {
            SlotAction::TryReserve => {
                if self.is_full() {
                    return Err(SlotError::Full(self.id.clone()));
                }
                self.available -= 1;
                Ok(SlotActionResult::Reserved { available: self.available })
            }
            SlotAction::Release => {
                let clamped = self.available >= self.capacity;
                if !clamped {
                    self.available += 1;
                }
                Ok(SlotActionResult::Released { available: self.available, clamped })
            }
        }
    }
}
