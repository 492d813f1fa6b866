//! The cart ledger: one line per dish, in first-add order.
//!
//! All operations are synchronous and infallible. The frontend owns exactly
//! one ledger for the lifetime of the page; nothing here is persisted.

use crate::model::cart_line::CartLine;
use crate::model::dish::Dish;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `dish`.
    ///
    /// An existing line for the same dish id is bumped in place, so the
    /// position of a line never changes after its first add.
    pub fn add_to_cart(&mut self, dish: &Dish) {
        match self.lines.iter_mut().find(|line| line.dish.id == dish.id) {
            Some(line) => line.qty += 1,
            None => self.lines.push(CartLine::new(dish.clone())),
        }
    }

    /// Drops the whole line for `dish_id`, whatever its quantity.
    ///
    /// Returns `false` when there was no such line.
    pub fn remove_from_cart(&mut self, dish_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.dish.id != dish_id);
        self.lines.len() != before
    }

    pub fn compute_total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct dishes in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.qty).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn dish(catalog: &Catalog, id: &str) -> Dish {
        catalog.get(id).cloned().unwrap()
    }

    #[test]
    fn repeated_adds_keep_one_line() {
        let catalog = Catalog::builtin();
        let naan = dish(&catalog, "naan");
        let mut ledger = CartLedger::new();

        for _ in 0..5 {
            ledger.add_to_cart(&naan);
        }

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.lines()[0].qty, 5);
        assert_eq!(ledger.item_count(), 5);
    }

    #[test]
    fn lines_keep_first_add_order() {
        let catalog = Catalog::builtin();
        let dal = dish(&catalog, "dal_tadka");
        let naan = dish(&catalog, "naan");
        let mut ledger = CartLedger::new();

        ledger.add_to_cart(&dal);
        ledger.add_to_cart(&naan);
        ledger.add_to_cart(&dal);

        let ids: Vec<&str> = ledger.lines().iter().map(|l| l.dish.id.as_str()).collect();
        assert_eq!(ids, ["dal_tadka", "naan"]);
        assert_eq!(ledger.lines()[0].qty, 2);
    }

    #[test]
    fn remove_drops_whole_line_and_is_idempotent() {
        let catalog = Catalog::builtin();
        let dal = dish(&catalog, "dal_tadka");
        let mut ledger = CartLedger::new();
        ledger.add_to_cart(&dal);
        ledger.add_to_cart(&dal);
        ledger.add_to_cart(&dal);

        assert!(ledger.remove_from_cart("dal_tadka"));
        assert!(ledger.is_empty());
        assert!(!ledger.remove_from_cart("dal_tadka"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn removing_unknown_dish_changes_nothing() {
        let catalog = Catalog::builtin();
        let mut ledger = CartLedger::new();
        ledger.add_to_cart(&dish(&catalog, "naan"));
        let before = ledger.clone();

        assert!(!ledger.remove_from_cart("biryani"));
        assert_eq!(ledger, before);
    }

    #[test]
    fn total_of_empty_ledger_is_zero() {
        assert_eq!(CartLedger::new().compute_total(), 0);
    }

    #[test]
    fn total_sums_price_times_qty() {
        let catalog = Catalog::builtin();
        let mut ledger = CartLedger::new();
        ledger.add_to_cart(&dish(&catalog, "dal_tadka"));
        ledger.add_to_cart(&dish(&catalog, "dal_tadka"));
        ledger.add_to_cart(&dish(&catalog, "naan"));
        ledger.add_to_cart(&dish(&catalog, "paneer_butter_masala"));

        assert_eq!(ledger.compute_total(), 180 * 2 + 50 + 260);
    }

    #[test]
    fn clear_empties_the_ledger() {
        let catalog = Catalog::builtin();
        let mut ledger = CartLedger::new();
        ledger.add_to_cart(&dish(&catalog, "naan"));
        ledger.clear();

        assert!(ledger.is_empty());
        assert_eq!(ledger.compute_total(), 0);
    }
}
