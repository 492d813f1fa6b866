//! Hand-off point between the order intake endpoint and the kitchen.
//!
//! Intake handlers never touch the kitchen directly. They push a
//! `QueuedOrder` onto a bounded MPSC channel held in `OrdersState`, and a
//! single background task (`start_order_desk`, spawned from `main.rs`)
//! drains the channel and writes one ticket per order to the log.

use common::model::order::Order;
use log::{debug, info};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Shared application state injected into the Actix app as `web::Data`.
#[derive(Clone)]
pub struct OrdersState {
    /// Sender side of the order desk queue.
    pub tx: mpsc::Sender<QueuedOrder>,
}

/// An accepted order waiting for the order desk.
#[derive(Debug)]
pub struct QueuedOrder {
    /// Ticket number assigned on intake.
    pub(crate) ticket: Uuid,
    pub(crate) order: Order,
}

impl QueuedOrder {
    pub fn new(order: Order) -> Self {
        Self {
            ticket: Uuid::new_v4(),
            order,
        }
    }
}

/// One-line kitchen ticket for the log.
pub fn ticket_line(queued: &QueuedOrder) -> String {
    let order = &queued.order;
    let items = order
        .items
        .iter()
        .map(|line| format!("{} x{}", line.dish.name, line.qty))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "ticket {} for {} ({}) at {}: {} | total ₹{}",
        queued.ticket, order.customer.name, order.customer.phone, order.restaurant_id, items, order.total
    )
}

/// Drains the order queue until every sender is dropped.
pub async fn start_order_desk(mut rx: mpsc::Receiver<QueuedOrder>) {
    while let Some(queued) = rx.recv().await {
        info!("{}", ticket_line(&queued));
        if let Ok(payload) = serde_json::to_string(&queued.order) {
            debug!("ticket {} payload: {}", queued.ticket, payload);
        }
    }
    info!("Order desk closed");
}
