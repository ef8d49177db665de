use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self) -> Cart;
}

#[async_trait]
pub trait GetCartItemsAmountUseCase: Send + Sync {
    async fn execute(&self) -> BTreeMap<ProductId, u32>;
}
