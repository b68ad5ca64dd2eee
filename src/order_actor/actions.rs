use crate::domain::{OrderStatus, PaymentOutcome};

/// Custom actions for Order entities.
///
/// Each one reads the current status, validates against the lifecycle table and
/// writes the new status in a single actor turn.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Staff or customer requested a status change.
    Transition(OrderStatus),
    /// The payment gateway reported back.
    ApplyPayment(PaymentOutcome),
}

/// What a status action did to the order.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionOutcome {
    pub order_id: u64,
    pub slot_id: String,
    pub from: OrderStatus,
    pub to: OrderStatus,
    /// Set for ready -> paid and completed -> ready.
    pub undo: bool,
    /// False when a repeated gateway callback found the order already settled.
    pub changed: bool,
}
