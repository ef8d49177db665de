//! Shared fakes and mocks for the cart use case tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::cart::model::CartLineItem;
use crate::domain::errors::RepositoryError;
use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::model::{CatalogProduct, Stock};
use crate::domain::inventory::services::InventoryGateway;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;
use crate::domain::storage::KeyValueStore;

mock! {
    pub Inventory {}

    #[async_trait]
    impl InventoryGateway for Inventory {
        async fn get_stock(&self, product_id: ProductId) -> Result<Stock, InventoryError>;
        async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, InventoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn catalog_product(id: u64) -> CatalogProduct {
    CatalogProduct {
        id: ProductId::new(id),
        title: format!("Running shoe {}", id),
        price: 179.9,
        image_url: format!("https://cdn.example.com/shoes/{}.jpg", id),
    }
}

pub fn line_item(id: u64, amount: u32) -> CartLineItem {
    CartLineItem {
        amount,
        ..CartLineItem::new(ProductId::new(id), &catalog_product(id))
    }
}

pub fn stock(id: ProductId, amount: u32) -> Stock {
    Stock {
        product_id: id,
        amount,
    }
}

/// In-memory key-value store that can be told to fail.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
    failing_writes: AtomicUsize,
    failing_reads: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn fail_next_writes(&self, count: usize) {
        self.failing_writes.store(count, Ordering::SeqCst);
    }

    pub fn fail_reads(&self) {
        self.failing_reads.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        if self.failing_reads.load(Ordering::SeqCst) {
            return Err(RepositoryError::DatabaseError);
        }
        Ok(self.entry(key))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let remaining = self.failing_writes.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failing_writes.store(remaining - 1, Ordering::SeqCst);
            return Err(RepositoryError::Persistence);
        }

        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Inventory with a fixed stock per product that answers after a short delay,
/// so concurrent callers interleave at the lookup.
pub struct SlowInventory {
    stock: HashMap<ProductId, u32>,
    delay: Duration,
}

impl SlowInventory {
    pub fn new(stock: &[(u64, u32)]) -> Self {
        Self {
            stock: stock
                .iter()
                .map(|(id, amount)| (ProductId::new(*id), *amount))
                .collect(),
            delay: Duration::from_millis(5),
        }
    }
}

#[async_trait]
impl InventoryGateway for SlowInventory {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, InventoryError> {
        tokio::time::sleep(self.delay).await;
        self.stock
            .get(&product_id)
            .map(|amount| stock(product_id, *amount))
            .ok_or(InventoryError::NotFound)
    }

    async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, InventoryError> {
        tokio::time::sleep(self.delay).await;
        if self.stock.contains_key(&product_id) {
            Ok(catalog_product(product_id.value()))
        } else {
            Err(InventoryError::NotFound)
        }
    }
}
