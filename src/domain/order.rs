use serde::{Deserialize, Serialize};

use super::OrderStatus;

/// A placed order as the stall sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Sequential order counter; also the source of the call number.
    pub id: u64,
    pub user_id: String,
    pub call_number: u32,
    pub status: OrderStatus,
    pub total_cents: u64,
    pub slot_id: String,
    /// Unix seconds.
    pub created_at: u64,
    pub items: Vec<OrderItem>,
    /// Gateway transaction id, set once payment succeeds.
    pub payment_reference: Option<String>,
    pub history: Vec<StatusChange>,
}

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Menu item id.
    pub id: String,
    pub name: String,
    pub unit_price_cents: u64,
    pub quantity: u32,
    pub size: Option<String>,
    #[serde(default)]
    pub customizations: Vec<String>,
}

/// Payload for creating a new order at checkout.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: String,
    pub slot_id: String,
    pub items: Vec<OrderItem>,
}

/// An applied status transition, kept for the admin audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub undo: bool,
    /// Unix seconds.
    pub at: u64,
}

/// What the payment gateway reported for an order.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    Succeeded { transaction_id: String },
    Failed { reason: String },
}

impl OrderItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price_cents: u64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price_cents,
            quantity,
            size: None,
            customizations: Vec::new(),
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_customization(mut self, tag: impl Into<String>) -> Self {
        self.customizations.push(tag.into());
        self
    }

    pub fn line_total_cents(&self) -> Option<u64> {
        self.unit_price_cents.checked_mul(u64::from(self.quantity))
    }
}

impl OrderCreate {
    pub fn new(user_id: impl Into<String>, slot_id: impl Into<String>, items: Vec<OrderItem>) -> Self {
        Self {
            user_id: user_id.into(),
            slot_id: slot_id.into(),
            items,
        }
    }

    /// Validates the cart and returns its total.
    ///
    /// # Errors
    /// Returns a description of the problem if the cart is empty, a line has a
    /// zero quantity, or the total overflows.
    pub fn total_cents(&self) -> Result<u64, String> {
        if self.user_id.is_empty() {
            return Err("Order has no user".to_string());
        }
        if self.items.is_empty() {
            return Err("Order has no items".to_string());
        }
        self.items.iter().try_fold(0u64, |total, item| {
            if item.quantity == 0 {
                return Err(format!("Item {} has zero quantity", item.id));
            }
            item.line_total_cents()
                .and_then(|line| total.checked_add(line))
                .ok_or_else(|| "Order total overflows".to_string())
        })
    }
}
