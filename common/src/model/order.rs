use crate::model::cart_line::CartLine;
use serde::{Deserialize, Serialize};

/// Who the order is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
}

impl Customer {
    /// Placeholder used until the app collects real customer details.
    pub fn guest() -> Self {
        Self {
            name: "Guest".to_string(),
            phone: "9999999999".to_string(),
        }
    }
}

/// Snapshot of the cart sent to the order endpoint.
///
/// Built by `OrderSubmitter::begin` and dropped once the request settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub restaurant_id: String,
    pub items: Vec<CartLine>,
    pub customer: Customer,
    /// Sum of `price * qty` over `items`.
    pub total: u64,
    /// Submission time in milliseconds since the Unix epoch.
    pub timestamp: u64,
}
