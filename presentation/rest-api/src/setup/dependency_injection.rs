use std::sync::Arc;

use business::application::cart::add_product::AddProductUseCaseImpl;
use business::application::cart::get::{GetCartItemsAmountUseCaseImpl, GetCartUseCaseImpl};
use business::application::cart::remove_product::RemoveProductUseCaseImpl;
use business::application::cart::store::CartStore;
use business::application::cart::update_amount::UpdateProductAmountUseCaseImpl;
use business::domain::inventory::services::InventoryGateway;
use business::domain::logger::Logger;
use business::domain::storage::KeyValueStore;

use inventory::client::InventoryClient;
use inventory::gateway::InventoryGatewayHttp;
use logger::TracingLogger;
use persistence::key_value::repository::KeyValueStorePostgres;

use crate::config::cart_config::CartConfig;
use crate::config::inventory_config::InventoryConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    /// Composition root: the one `CartStore` of the process is created here
    /// and handed to every cart use case.
    pub async fn new(
        pool: sqlx::PgPool,
        inventory_config: &InventoryConfig,
        cart_config: &CartConfig,
    ) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let storage: Arc<dyn KeyValueStore> = Arc::new(KeyValueStorePostgres::new(pool));
        let inventory: Arc<dyn InventoryGateway> = Arc::new(InventoryGatewayHttp::new(
            InventoryClient::new(inventory_config.api_url.clone(), inventory_config.timeout),
        ));

        let store = Arc::new(
            CartStore::load(storage, logger.clone(), cart_config.storage_key.clone()).await,
        );

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let get_amounts_use_case = Arc::new(GetCartItemsAmountUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let add_product_use_case = Arc::new(AddProductUseCaseImpl {
            store: store.clone(),
            inventory: inventory.clone(),
            logger: logger.clone(),
        });
        let remove_product_use_case = Arc::new(RemoveProductUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let update_amount_use_case = Arc::new(UpdateProductAmountUseCaseImpl {
            store,
            inventory,
            logger,
        });

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            get_amounts_use_case,
            add_product_use_case,
            remove_product_use_case,
            update_amount_use_case,
        );

        Ok(Self {
            health_api,
            cart_api,
        })
    }
}
