use std::time::Duration;

use reqwest::Client;

use business::domain::shared::value_objects::ProductId;

/// Shared HTTP client configuration for the catalog inventory API.
pub struct InventoryClient {
    pub client: Client,
    pub base_url: String,
}

impl InventoryClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the stock endpoint URL for a product.
    pub fn stock_url(&self, product_id: ProductId) -> String {
        format!("{}/stock/{}", self.base_url, product_id)
    }

    /// Returns the product endpoint URL for a product.
    pub fn product_url(&self, product_id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_endpoint_urls() {
        let client = InventoryClient::new(
            "http://localhost:3333".to_string(),
            Duration::from_secs(5),
        );

        assert_eq!(
            client.stock_url(ProductId::new(1)),
            "http://localhost:3333/stock/1"
        );
        assert_eq!(
            client.product_url(ProductId::new(2)),
            "http://localhost:3333/products/2"
        );
    }

    #[test]
    fn should_ignore_trailing_slash_in_base_url() {
        let client = InventoryClient::new(
            "http://catalog.internal/api/".to_string(),
            Duration::from_secs(5),
        );

        assert_eq!(
            client.stock_url(ProductId::new(7)),
            "http://catalog.internal/api/stock/7"
        );
    }
}
