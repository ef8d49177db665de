use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use business::domain::inventory::errors::InventoryError;
use business::domain::inventory::model::{CatalogProduct, Stock};
use business::domain::inventory::services::InventoryGateway;
use business::domain::shared::value_objects::ProductId;

use crate::client::InventoryClient;

/// Body of `GET /stock/{id}`. Only the amount is read.
#[derive(Deserialize)]
struct StockResponse {
    amount: u32,
}

#[derive(Deserialize)]
struct ProductResponse {
    id: u64,
    title: String,
    price: f64,
    #[serde(alias = "imageUrl")]
    image: String,
}

impl From<ProductResponse> for CatalogProduct {
    fn from(response: ProductResponse) -> Self {
        CatalogProduct {
            id: ProductId::new(response.id),
            title: response.title,
            price: response.price,
            image_url: response.image,
        }
    }
}

pub struct InventoryGatewayHttp {
    client: InventoryClient,
}

impl InventoryGatewayHttp {
    pub fn new(client: InventoryClient) -> Self {
        Self { client }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, InventoryError> {
        let response = self
            .client
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(url, error = %err, "inventory request failed");
                InventoryError::Unavailable
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(InventoryError::NotFound);
        }
        if !status.is_success() {
            tracing::warn!(url, status = %status, "inventory answered with an error status");
            return Err(InventoryError::Unavailable);
        }

        response.json::<T>().await.map_err(|err| {
            tracing::warn!(url, error = %err, "inventory response could not be decoded");
            InventoryError::InvalidResponse
        })
    }
}

#[async_trait]
impl InventoryGateway for InventoryGatewayHttp {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, InventoryError> {
        let stock: StockResponse = self.fetch(&self.client.stock_url(product_id)).await?;
        Ok(Stock {
            product_id,
            amount: stock.amount,
        })
    }

    async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, InventoryError> {
        let product: ProductResponse = self.fetch(&self.client.product_url(product_id)).await?;
        Ok(product.into())
    }
}
