use super::{
    cart_config::CartConfig, cors_config, inventory_config::InventoryConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub inventory: InventoryConfig,
    pub cart: CartConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            inventory: InventoryConfig::from_env(),
            cart: CartConfig::from_env(),
        }
    }
}
