use std::collections::BTreeMap;

use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLineItem};
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddProductRequest {
    /// Catalog identifier of the product to add one unit of
    pub product_id: u64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductAmountRequest {
    /// Requested quantity, must be positive and within stock
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartItemResponse {
    /// Catalog identifier
    pub id: u64,
    /// Product title captured when first added
    pub title: String,
    /// Unit price captured when first added
    pub price: f64,
    /// Product image captured when first added
    pub image_url: String,
    /// Quantity in the cart
    pub amount: u32,
}

impl From<CartLineItem> for CartItemResponse {
    fn from(item: CartLineItem) -> Self {
        Self {
            id: item.product_id.value(),
            title: item.title,
            price: item.price,
            image_url: item.image_url,
            amount: item.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartItemAmountResponse {
    /// Catalog identifier
    pub product_id: u64,
    /// Quantity in the cart
    pub amount: u32,
}

pub fn cart_items(cart: Cart) -> Vec<CartItemResponse> {
    cart.items().iter().cloned().map(Into::into).collect()
}

pub fn cart_amounts(amounts: BTreeMap<ProductId, u32>) -> Vec<CartItemAmountResponse> {
    amounts
        .into_iter()
        .map(|(product_id, amount)| CartItemAmountResponse {
            product_id: product_id.value(),
            amount,
        })
        .collect()
}
