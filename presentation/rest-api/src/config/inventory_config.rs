use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:3333";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the catalog inventory API.
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl InventoryConfig {
    /// Environment variables:
    /// - INVENTORY_API_URL: base URL serving /stock/{id} and /products/{id}
    ///   (default: "http://localhost:3333")
    /// - INVENTORY_TIMEOUT_SECS: request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("INVENTORY_API_URL").ok(),
            env::var("INVENTORY_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(api_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let timeout_secs = timeout_secs
            .and_then(|t| t.trim().parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
