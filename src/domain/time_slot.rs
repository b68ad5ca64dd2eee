use serde::{Deserialize, Serialize};

/// A pickup-time bucket with a finite number of seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    /// Display label, e.g. "12:15".
    pub label: String,
    pub capacity: u32,
    pub available: u32,
    /// Position in the pickup-time picker.
    pub display_order: u32,
}

/// Payload for provisioning a time slot.
#[derive(Debug, Clone)]
pub struct TimeSlotCreate {
    pub label: String,
    pub capacity: u32,
    /// Remaining seats when the slot is loaded; defaults to `capacity`.
    pub available: Option<u32>,
    pub display_order: u32,
}

/// Payload for editing a provisioned slot.
#[derive(Debug, Clone, Default)]
pub struct TimeSlotPatch {
    pub label: Option<String>,
    pub capacity: Option<u32>,
}

impl TimeSlot {
    pub fn is_full(&self) -> bool {
        self.available == 0
    }

    /// Seats currently held by orders.
    pub fn reserved(&self) -> u32 {
        self.capacity.saturating_sub(self.available)
    }
}

impl TimeSlotCreate {
    pub fn new(label: impl Into<String>, capacity: u32, display_order: u32) -> Self {
        Self {
            label: label.into(),
            capacity,
            available: None,
            display_order,
        }
    }

    pub fn with_available(mut self, available: u32) -> Self {
        self.available = Some(available);
        self
    }
}
