//! Build-time settings for the ordering page.
//!
//! Values come from environment variables present when the WASM bundle is
//! compiled (e.g. `ORDER_ENDPOINT=/orders trunk build`), falling back to the
//! defaults below.

const DEFAULT_ORDER_ENDPOINT: &str = "/api/external-order";
const DEFAULT_RESTAURANT_ID: &str = "bapu-ki-kutiya";
const DEFAULT_RESTAURANT_NAME: &str = "Bapu Ki Kutiya";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Relative URL orders are POSTed to.
    pub order_endpoint: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("ORDER_ENDPOINT"),
            option_env!("RESTAURANT_ID"),
            option_env!("RESTAURANT_NAME"),
        )
    }

    fn from_values(
        order_endpoint: Option<&str>,
        restaurant_id: Option<&str>,
        restaurant_name: Option<&str>,
    ) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        Self {
            order_endpoint: pick(order_endpoint, DEFAULT_ORDER_ENDPOINT),
            restaurant_id: pick(restaurant_id, DEFAULT_RESTAURANT_ID),
            restaurant_name: pick(restaurant_name, DEFAULT_RESTAURANT_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_defaults() {
        let config = AppConfig::from_values(None, Some("  "), None);
        assert_eq!(config.order_endpoint, "/api/external-order");
        assert_eq!(config.restaurant_id, "bapu-ki-kutiya");
        assert_eq!(config.restaurant_name, "Bapu Ki Kutiya");
    }

    #[test]
    fn provided_values_win() {
        let config = AppConfig::from_values(Some("/orders"), Some("dhaba-42"), Some("Dhaba 42"));
        assert_eq!(config.order_endpoint, "/orders");
        assert_eq!(config.restaurant_id, "dhaba-42");
        assert_eq!(config.restaurant_name, "Dhaba 42");
    }
}
