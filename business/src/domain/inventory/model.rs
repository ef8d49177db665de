use crate::domain::shared::value_objects::ProductId;

/// Units currently available for a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stock {
    pub product_id: ProductId,
    pub amount: u32,
}

/// Display attributes of a catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image_url: String,
}
