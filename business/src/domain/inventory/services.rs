use async_trait::async_trait;

use super::errors::InventoryError;
use super::model::{CatalogProduct, Stock};
use crate::domain::shared::value_objects::ProductId;

/// Service port for the catalog inventory.
///
/// Both lookups may suspend on I/O and may fail; callers decide how a
/// failure is reported.
#[async_trait]
pub trait InventoryGateway: Send + Sync {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, InventoryError>;

    async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, InventoryError>;
}
