/// Custom actions for TimeSlot entities.
///
/// Both run inside the slot actor, so the check and the counter update happen
/// in one step with no other request interleaved.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotAction {
    /// Takes one seat if any is left.
    ///
    /// # Errors
    /// Fails with `SlotError::Full` when no seat is left; the counter is unchanged.
    TryReserve,
    /// Returns one seat, never going above capacity.
    Release,
}

/// Results from SlotActions - variants match 1:1 with SlotAction
#[derive(Debug, Clone, PartialEq)]
pub enum SlotActionResult {
    /// Seats left after the reservation.
    Reserved { available: u32 },
    /// Seats available after the release. `clamped` is set when the slot was
    /// already at capacity and nothing changed.
    Released { available: u32, clamped: bool },
}
