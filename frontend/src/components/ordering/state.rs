//! Component state for the ordering page.
//!
//! The page owns exactly one of each piece of state: the menu, the cart,
//! the preview slot and the order submitter. `update` mutates them and
//! `view` only reads them.

use common::cart::CartLedger;
use common::catalog::Catalog;
use common::order::OrderSubmitter;
use common::preview::DishPreview;

use crate::config::AppConfig;

/// Main state container for the `OrderingComponent`.
pub struct OrderingComponent {
    /// Read-only menu.
    pub catalog: Catalog,

    /// Lines the user has added so far.
    pub ledger: CartLedger,

    /// Dish shown in the preview modal, if any.
    pub preview: DishPreview,

    /// In-flight flag and success overlay flag for order submission.
    pub submitter: OrderSubmitter,
}

impl OrderingComponent {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            catalog: Catalog::builtin(),
            ledger: CartLedger::new(),
            preview: DishPreview::default(),
            submitter: OrderSubmitter::new(config.restaurant_id.clone()),
        }
    }
}
