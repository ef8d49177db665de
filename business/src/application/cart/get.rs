use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::get::{GetCartItemsAmountUseCase, GetCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

pub struct GetCartUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> Cart {
        let cart = self.store.current().await;
        self.logger
            .debug(&format!("Retrieved cart with {} line items", cart.len()));
        cart
    }
}

pub struct GetCartItemsAmountUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartItemsAmountUseCase for GetCartItemsAmountUseCaseImpl {
    async fn execute(&self) -> BTreeMap<ProductId, u32> {
        let cart = self.store.current().await;
        self.logger.debug(&format!(
            "Retrieved amounts for {} products ({} units)",
            cart.len(),
            cart.total_items()
        ));
        cart.items_amount()
    }
}
