use log::{info, warn};
use std::{env, fmt::Display, str::FromStr};

/// Server settings read from the environment at startup.
///
/// Every value has a default, so running the binary with no environment at
/// all serves the app on `http://127.0.0.1:8080`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the app in the default browser once the server is up.
    pub open_browser: bool,
    /// Path the frontend posts orders to.
    pub order_path: String,
    /// How many accepted orders may wait for the order desk.
    pub order_queue_capacity: usize,
}

impl ServerConfig {
    pub fn load() -> Self {
        Self {
            host: try_load("HOST", "127.0.0.1".to_string()),
            port: try_load("PORT", 8080u16),
            open_browser: try_load("OPEN_BROWSER", true),
            order_path: try_load("ORDER_PATH", "/api/external-order".to_string()),
            order_queue_capacity: try_load("ORDER_QUEUE_CAPACITY", 100usize),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
