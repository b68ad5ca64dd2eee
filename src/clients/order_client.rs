use tracing::{debug, error, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::clients::SlotClient;
use crate::domain::{Order, OrderCreate, OrderStatus, PaymentOutcome};
use crate::lifecycle::{self, StatusAction};
use crate::order_actor::{OrderAction, OrderError, TransitionOutcome};
use crate::slot_actor::SlotError;

/// Client for interacting with the Order actor.
///
/// This client handles the orchestration around orders: claiming a pickup seat
/// before an order exists, and handing the seat back when an order ends in
/// `cancelled` or `refunded`.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    slot_client: SlotClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, slot_client: SlotClient) -> Self {
        Self { inner, slot_client }
    }

    #[instrument(skip(self, params), fields(user_id = %params.user_id, slot_id = %params.slot_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        info!("Processing create_order request");

        // Step 1: Validate cart
        let total_cents = params.total_cents().map_err(|e| {
            warn!(error = %e, "Cart validation failed");
            OrderError::ValidationError(e)
        })?;

        // Step 2: Claim a seat in the pickup slot
        match self.slot_client.try_reserve(params.slot_id.clone()).await {
            Ok(remaining) => info!(remaining, "Pickup seat reserved"),
            Err(SlotError::Full(slot_id)) => {
                info!("Pickup slot is full");
                return Err(OrderError::SlotUnavailable(slot_id));
            }
            Err(e) => {
                warn!(error = %e, "Pickup seat reservation failed");
                return Err(e.into());
            }
        }

        // Step 3: Create order, giving the seat back if that fails
        let slot_id = params.slot_id.clone();
        let id = match self.inner.create(params).await {
            Ok(id) => id,
            Err(e) => {
                error!(error = %e, "Order creation failed, releasing seat");
                self.release_seat(slot_id).await;
                return Err(e.into());
            }
        };

        info!(order_id = id, total_cents, "Order created");

        // Step 4: Return the stored order
        self.inner
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Applies a validated status change.
    ///
    /// # Errors
    /// `InvalidTransition` names the current status, the requested one and what
    /// the current status allows; the stored order is left as it was.
    #[instrument(skip(self))]
    pub async fn change_status(&self, id: u64, requested: OrderStatus) -> Result<TransitionOutcome, OrderError> {
        debug!("Sending request");
        self.apply(id, OrderAction::Transition(requested)).await
    }

    /// [`OrderClient::change_status`] for a status string taken from a request.
    #[instrument(skip(self))]
    pub async fn request_status_change(&self, id: u64, requested: &str) -> Result<TransitionOutcome, OrderError> {
        let requested = requested.parse::<OrderStatus>().map_err(|e| {
            warn!(error = %e, "Rejected status change request");
            OrderError::from(e)
        })?;
        self.change_status(id, requested).await
    }

    /// Payment gateway callback.
    #[instrument(skip(self))]
    pub async fn apply_payment(&self, id: u64, outcome: PaymentOutcome) -> Result<TransitionOutcome, OrderError> {
        debug!("Sending request");
        self.apply(id, OrderAction::ApplyPayment(outcome)).await
    }

    /// Actions the UI may offer for the order's current status.
    #[instrument(skip(self))]
    pub async fn available_actions(&self, id: u64) -> Result<Vec<StatusAction>, OrderError> {
        debug!("Sending request");
        let order = self
            .inner
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        Ok(lifecycle::available_actions(order.status))
    }

    /// All orders, oldest first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders = self.inner.list().await?;
        orders.sort_by_key(|order| order.id);
        Ok(orders)
    }

    #[instrument(skip(self))]
    pub async fn orders_with_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        let orders = self.list_orders().await?;
        Ok(orders.into_iter().filter(|order| order.status == status).collect())
    }

    async fn apply(&self, id: u64, action: OrderAction) -> Result<TransitionOutcome, OrderError> {
        let outcome = match self.inner.perform_action(id, action).await {
            Ok(outcome) => outcome,
            Err(e) => {
                let e = OrderError::from(e);
                match &e {
                    OrderError::InvalidTransition(rejected) => {
                        warn!(
                            reason = %lifecycle::describe_rejection(rejected.current, rejected.requested),
                            "Status change rejected"
                        );
                    }
                    OrderError::NotFound(_) => warn!("Order not found"),
                    _ => error!(error = %e, "Status change failed"),
                }
                return Err(e);
            }
        };

        if !outcome.changed {
            debug!(status = %outcome.to, "Status already applied");
            return Ok(outcome);
        }

        info!(from = %outcome.from, to = %outcome.to, undo = outcome.undo, "Order status changed");

        if lifecycle::is_terminal(outcome.to) {
            self.release_seat(outcome.slot_id.clone()).await;
        }
        Ok(outcome)
    }

    async fn release_seat(&self, slot_id: String) {
        if let Err(e) = self.slot_client.release(slot_id).await {
            error!(error = %e, "Failed to release pickup seat");
        }
    }
}

impl_client_methods!(OrderClient, Order, u64, OrderError, order);
