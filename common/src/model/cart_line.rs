use crate::model::dish::Dish;
use serde::{Deserialize, Serialize};

/// A dish together with how many of it are in the cart.
///
/// On the wire the dish fields are flattened next to `qty`, so a line looks
/// like `{"id": "naan", "name": "Naan", "price": 50, ..., "qty": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub dish: Dish,
    /// Always at least 1 while the line is in a ledger.
    pub qty: u32,
}

impl CartLine {
    pub fn new(dish: Dish) -> Self {
        Self { dish, qty: 1 }
    }

    /// `price * qty` for this line.
    pub fn subtotal(&self) -> u64 {
        u64::from(self.dish.price) * u64::from(self.qty)
    }
}
