use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::errors::{CartError, CartOperation};
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::update_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::inventory::services::InventoryGateway;
use crate::domain::logger::Logger;

pub struct UpdateProductAmountUseCaseImpl {
    pub store: Arc<CartStore>,
    pub inventory: Arc<dyn InventoryGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductAmountUseCase for UpdateProductAmountUseCaseImpl {
    async fn execute(&self, params: UpdateProductAmountParams) -> Result<Cart, CartError> {
        let product_id = params.product_id;
        self.logger.info(&format!(
            "Setting amount of product {} to {}",
            product_id, params.amount
        ));

        // Zero never removes the line item, only RemoveProduct does.
        if params.amount <= 0 {
            self.logger
                .warn(&format!("Rejected amount {} for product {}", params.amount, product_id));
            return Err(CartError::InvalidAmount);
        }

        let mutation = self.store.begin().await;
        if mutation.current().find(product_id).is_none() {
            self.logger
                .warn(&format!("Product {} is not in the cart", product_id));
            return Err(CartError::ProductNotInCart);
        }

        let stock = self
            .inventory
            .get_stock(product_id)
            .await
            .map_err(|source| {
                self.logger.warn(&format!(
                    "Inventory lookup for product {} failed: {}",
                    product_id, source
                ));
                CartError::GatewayFailure {
                    operation: CartOperation::Update,
                    source,
                }
            })?;

        let requested = match u32::try_from(params.amount) {
            Ok(amount) if amount <= stock.amount => amount,
            _ => {
                self.logger.warn(&format!(
                    "Product {} out of stock: requested {}, available {}",
                    product_id, params.amount, stock.amount
                ));
                return Err(CartError::OutOfStock);
            }
        };

        let next = mutation.current().with_amount(product_id, requested)?;
        let cart = mutation.commit(next).await?;

        self.logger.info(&format!(
            "Amount of product {} updated to {}",
            product_id, requested
        ));
        Ok(cart)
    }
}
