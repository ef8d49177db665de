use std::env;

/// Configuration for the cart store.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Key the cart snapshot is stored under.
    pub storage_key: String,
}

impl CartConfig {
    /// Environment variables:
    /// - CART_STORAGE_KEY: snapshot key (default: "cart:default")
    pub fn from_env() -> Self {
        Self::from_value(env::var("CART_STORAGE_KEY").ok())
    }

    fn from_value(storage_key: Option<String>) -> Self {
        Self {
            storage_key: storage_key
                .filter(|key| !key.trim().is_empty())
                .unwrap_or_else(|| "cart:default".to_string()),
        }
    }
}
