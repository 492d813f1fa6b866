//! Small helpers shared by the ordering views and update logic.

use num_format::{Locale, ToFormattedString};

/// Shown when an order could not be delivered.
pub const ORDER_FAILED_MESSAGE: &str = "Order failed! Make sure backend is running.";

/// Formats a whole-rupee amount for display, e.g. `₹1,250`.
pub fn format_price(amount: u64) -> String {
    format!("₹{}", amount.to_formatted_string(&Locale::en))
}

/// Cart panel title with the number of units in the cart.
pub fn cart_heading(item_count: u32) -> String {
    match item_count {
        1 => "Cart (1 item)".to_string(),
        n => format!("Cart ({n} items)"),
    }
}

/// Blocking browser alert. Silently does nothing outside a browser window.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Milliseconds since the Unix epoch, from the browser clock.
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}
