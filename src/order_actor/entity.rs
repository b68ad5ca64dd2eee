use std::time::{SystemTime, UNIX_EPOCH};

use crate::actor_framework::Entity;
use crate::domain::{transform_call_number, Order, OrderCreate, OrderStatus, PaymentOutcome, StatusChange};
use crate::lifecycle;
use super::actions::{OrderAction, TransitionOutcome};
use super::error::OrderError;

impl Entity for Order {
    type Id = u64;
    type CreateParams = OrderCreate;
    type Patch = ();
    type Action = OrderAction;
    type ActionResult = TransitionOutcome;
    type Error = OrderError;

    fn id(&self) -> &u64 { &self.id }

    /// Creates a new Order from checkout parameters.
    ///
    /// # Arguments
    /// * `id` - Next value of the order counter
    /// * `params` - User, reserved slot and cart lines
    ///
    /// # Notes
    /// The order starts `pending`; its call number is derived from `id`.
    fn from_create(id: u64, params: OrderCreate) -> Result<Self, OrderError> {
        let total_cents = params.total_cents().map_err(OrderError::ValidationError)?;
        Ok(Self {
            id,
            user_id: params.user_id,
            call_number: transform_call_number(id),
            status: OrderStatus::Pending,
            total_cents,
            slot_id: params.slot_id,
            created_at: unix_now(),
            items: params.items,
            payment_reference: None,
            history: Vec::new(),
        })
    }

    /// Orders are only changed through status actions.
    fn on_update(&mut self, _patch: ()) -> Result<(), OrderError> {
        Err(OrderError::ValidationError(
            "Orders can only change through status transitions".to_string(),
        ))
    }

    /// Handles order-specific actions.
    ///
    /// # Actions
    /// - `Transition(to)`: validated move to `to`
    /// - `ApplyPayment(Succeeded)`: `pending -> paid`, recording the transaction id
    /// - `ApplyPayment(Failed)`: `pending -> cancelled`
    ///
    /// A gateway callback that repeats an outcome already applied is answered
    /// with `changed: false`.
    ///
    /// # Errors
    /// Returns `InvalidTransition` if the lifecycle table forbids the move.
    fn handle_action(&mut self, action: OrderAction) -> Result<TransitionOutcome, OrderError> {
        match action {
            OrderAction::Transition(to) => self.transition_to(to),
            OrderAction::ApplyPayment(PaymentOutcome::Succeeded { transaction_id }) => {
                if self.status == OrderStatus::Paid
                    && self.payment_reference.as_deref() == Some(transaction_id.as_str())
                {
                    return Ok(self.unchanged());
                }
                let outcome = self.transition_to(OrderStatus::Paid)?;
                self.payment_reference = Some(transaction_id);
                Ok(outcome)
            }
            OrderAction::ApplyPayment(PaymentOutcome::Failed { .. }) => {
                if self.status == OrderStatus::Cancelled {
                    return Ok(self.unchanged());
                }
                self.transition_to(OrderStatus::Cancelled)
            }
        }
    }
}

impl Order {
    fn transition_to(&mut self, to: OrderStatus) -> Result<TransitionOutcome, OrderError> {
        let from = self.status;
        lifecycle::validate_transition(from, to)?;
        let undo = lifecycle::is_undo(from, to);
        self.history.push(StatusChange { from, to, undo, at: unix_now() });
        self.status = to;
        Ok(TransitionOutcome {
            order_id: self.id,
            slot_id: self.slot_id.clone(),
            from,
            to,
            undo,
            changed: true,
        })
    }

    fn unchanged(&self) -> TransitionOutcome {
        TransitionOutcome {
            order_id: self.id,
            slot_id: self.slot_id.clone(),
            from: self.status,
            to: self.status,
            undo: false,
            changed: false,
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
