use std::path::PathBuf;

use tracing::{error, info, warn, Instrument};
use stall_orders::app_system::{setup_tracing, OrderSystem, StallConfig, SystemError};
use stall_orders::domain::{OrderCreate, OrderItem, OrderStatus, PaymentOutcome};
use stall_orders::lifecycle;

const DEFAULT_CONFIG_PATH: &str = "config/stall.toml";

fn config_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("STALL_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
        .into()
}

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = StallConfig::from_file(config_path())?;

    // Setup tracing once for the entire application
    setup_tracing(&config.system.log_filter);

    info!("Starting stall order system");

    let system = OrderSystem::start(&config).await?;

    match serde_json::to_string(&lifecycle::table_snapshot()) {
        Ok(table) => info!(%table, "Order status table"),
        Err(e) => warn!(error = %e, "Could not serialize status table"),
    }

    let slots = system.slot_client.list_slots().await?;
    for slot in &slots {
        info!(slot_id = %slot.id, label = %slot.label, available = slot.available, capacity = slot.capacity, "Pickup slot");
    }
    let Some(slot) = slots.first() else {
        return Ok(system.shutdown().await?);
    };

    // Checkout: claims a seat in the slot and creates a pending order
    let cart = OrderCreate::new(
        "user_demo",
        slot.id.clone(),
        vec![
            OrderItem::new("beef-noodles", "Beef Noodles", 650, 1).with_size("large"),
            OrderItem::new("milk-tea", "Milk Tea", 300, 2).with_customization("less ice"),
        ],
    );

    let span = tracing::info_span!("checkout");
    let order = async {
        info!("Placing order");
        system.order_client.create_order(cart).await
    }
    .instrument(span)
    .await?;

    info!(order_id = order.id, call_number = order.call_number, total_cents = order.total_cents, "Order placed");

    let span = tracing::info_span!("fulfillment", call_number = order.call_number);
    let result = async {
        let orders = &system.order_client;
        orders
            .apply_payment(order.id, PaymentOutcome::Succeeded { transaction_id: "demo_tx_1".into() })
            .await?;
        orders.change_status(order.id, OrderStatus::Ready).await?;
        orders.change_status(order.id, OrderStatus::Completed).await?;

        // Staff handed out the wrong bag; take it back to ready
        for action in orders.available_actions(order.id).await? {
            if action.is_undo {
                info!(target_status = %action.target, "Undo needs confirmation");
            }
        }
        orders.change_status(order.id, OrderStatus::Ready).await?;
        orders.change_status(order.id, OrderStatus::Completed).await?;

        // Not allowed: completed orders can only go back to ready
        if let Err(e) = orders.change_status(order.id, OrderStatus::Cancelled).await {
            info!(error = %e, "Rejected as expected");
        }
        orders.get_order(order.id).await
    }
    .instrument(span)
    .await;

    match result {
        Ok(Some(order)) => info!(status = %order.status, changes = order.history.len(), "Order fulfilled"),
        Ok(None) => warn!("Order disappeared"),
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
