/// First call number shown to customers.
pub const CALL_NUMBER_BASE: u32 = 201;
/// Width of the display window; numbers recycle after this many orders.
pub const CALL_NUMBER_WINDOW: u64 = 100;

/// Maps the sequential order counter into the 201..=300 call number window.
pub fn transform_call_number(raw: u64) -> u32 {
    (raw % CALL_NUMBER_WINDOW) as u32 + CALL_NUMBER_BASE
}
