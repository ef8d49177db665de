use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::errors::{CartError, SnapshotError};
use crate::domain::inventory::model::CatalogProduct;
use crate::domain::shared::value_objects::ProductId;

/// One distinct catalog product in the cart.
///
/// Display attributes are copied from the catalog when the product is first
/// added and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(rename = "imageUrl", alias = "image")]
    pub image_url: String,
    pub amount: u32,
}

impl CartLineItem {
    /// Creates the line item for a product entering the cart, with an amount of one.
    pub fn new(product_id: ProductId, product: &CatalogProduct) -> Self {
        Self {
            product_id,
            title: product.title.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            amount: 1,
        }
    }

    /// Returns a copy of this line item with another amount.
    pub fn with_amount(&self, amount: u32) -> Result<Self, CartError> {
        if amount == 0 {
            return Err(CartError::InvalidAmount);
        }

        Ok(Self {
            amount,
            ..self.clone()
        })
    }
}

/// Ordered collection of line items, unique by product id.
///
/// A `Cart` is a value: every change produces a new `Cart` and leaves the
/// original untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a cart from line items, rejecting duplicates and zero amounts.
    pub fn from_items(items: Vec<CartLineItem>) -> Result<Self, SnapshotError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.amount == 0 {
                return Err(SnapshotError::ZeroAmount(item.product_id));
            }
            if !seen.insert(item.product_id) {
                return Err(SnapshotError::DuplicateProduct(item.product_id));
            }
        }

        Ok(Self { items })
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Amount of `product_id` in the cart, zero when absent.
    pub fn amount_of(&self, product_id: ProductId) -> u32 {
        self.find(product_id).map_or(0, |item| item.amount)
    }

    /// Sum of all line item amounts.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    /// Amount per product id.
    pub fn items_amount(&self) -> BTreeMap<ProductId, u32> {
        self.items
            .iter()
            .map(|item| (item.product_id, item.amount))
            .collect()
    }

    /// Substitutes the line item with the same product id, or appends it.
    pub fn with_item(&self, item: CartLineItem) -> Self {
        let mut items = self.items.clone();
        match self.position(item.product_id) {
            Some(index) => items[index] = item,
            None => items.push(item),
        }
        Self { items }
    }

    pub fn with_amount(&self, product_id: ProductId, amount: u32) -> Result<Self, CartError> {
        let item = self
            .find(product_id)
            .ok_or(CartError::ProductNotInCart)?
            .with_amount(amount)?;

        Ok(self.with_item(item))
    }

    pub fn without(&self, product_id: ProductId) -> Result<Self, CartError> {
        if self.find(product_id).is_none() {
            return Err(CartError::ProductNotInCart);
        }

        let items = self
            .items
            .iter()
            .filter(|item| item.product_id != product_id)
            .cloned()
            .collect();
        Ok(Self { items })
    }

    /// Serializes the cart as a JSON array of line items.
    pub fn to_snapshot(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(&self.items)?)
    }

    pub fn from_snapshot(raw: &str) -> Result<Self, SnapshotError> {
        let items: Vec<CartLineItem> = serde_json::from_str(raw)?;
        Self::from_items(items)
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product_id == product_id)
    }
}
