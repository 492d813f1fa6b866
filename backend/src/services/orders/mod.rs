//! # Order Service Module
//!
//! Receives orders posted by the frontend's cart panel.
//!
//! The endpoint path is configurable (`ORDER_PATH`) because the frontend is
//! built against whatever path the deployment exposes, `/api/external-order`
//! by default.

mod intake;

use actix_web::web::{post, resource};
use actix_web::Resource;

/// Configures and returns the Actix `Resource` for order intake.
///
/// # Registered Routes:
///
/// *   **`POST {order_path}`**:
///     - **Handler**: `intake::process`
///     - **Description**: Accepts a JSON `Order` (`restaurantId`, `items`, `customer`,
///       `total`, `timestamp`), queues it for the order desk and answers `200 OK`.
///       Answers `503 Service Unavailable` when the desk cannot take it.
pub fn configure_routes(order_path: &str) -> Resource {
    resource(order_path).route(post().to(intake::process))
}
