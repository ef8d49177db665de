use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::errors::{CartError, CartOperation};
use crate::domain::cart::model::{Cart, CartLineItem};
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::services::InventoryGateway;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

pub struct AddProductUseCaseImpl {
    pub store: Arc<CartStore>,
    pub inventory: Arc<dyn InventoryGateway>,
    pub logger: Arc<dyn Logger>,
}

impl AddProductUseCaseImpl {
    fn gateway_failure(&self, product_id: ProductId, source: InventoryError) -> CartError {
        self.logger.warn(&format!(
            "Inventory lookup for product {} failed: {}",
            product_id, source
        ));
        CartError::GatewayFailure {
            operation: CartOperation::Add,
            source,
        }
    }
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Result<Cart, CartError> {
        let product_id = params.product_id;
        self.logger
            .info(&format!("Adding product {} to cart", product_id));

        let mutation = self.store.begin().await;
        let current_amount = mutation.current().amount_of(product_id);

        let stock = self
            .inventory
            .get_stock(product_id)
            .await
            .map_err(|e| self.gateway_failure(product_id, e))?;

        let desired_amount = current_amount.saturating_add(1);
        if desired_amount > stock.amount {
            self.logger.warn(&format!(
                "Product {} out of stock: requested {}, available {}",
                product_id, desired_amount, stock.amount
            ));
            return Err(CartError::OutOfStock);
        }

        let next = if current_amount > 0 {
            mutation.current().with_amount(product_id, desired_amount)?
        } else {
            let product = self
                .inventory
                .get_product(product_id)
                .await
                .map_err(|e| self.gateway_failure(product_id, e))?;
            mutation
                .current()
                .with_item(CartLineItem::new(product_id, &product))
        };

        let cart = mutation.commit(next).await?;

        self.logger.info(&format!(
            "Product {} added to cart, amount now {}",
            product_id, desired_amount
        ));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::{
        MemoryStore, MockInventory, SlowInventory, catalog_product, line_item, mock_logger, stock,
    };

    const KEY: &str = "cart:test";

    async fn store_with(cart: &Cart) -> (Arc<CartStore>, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::with_entry(KEY, &cart.to_snapshot().unwrap()));
        let store = CartStore::load(storage.clone(), mock_logger(), KEY).await;
        (Arc::new(store), storage)
    }

    fn inventory_with_stock(amount: u32) -> MockInventory {
        let mut inventory = MockInventory::new();
        inventory
            .expect_get_stock()
            .returning(move |id| Ok(stock(id, amount)));
        inventory
            .expect_get_product()
            .returning(|id| Ok(catalog_product(id.value())));
        inventory
    }

    fn add(id: u64) -> AddProductParams {
        AddProductParams {
            product_id: ProductId::new(id),
        }
    }

    #[tokio::test]
    async fn should_insert_new_line_item_with_amount_one() {
        let (store, storage) = store_with(&Cart::empty()).await;

        let use_case = AddProductUseCaseImpl {
            store,
            inventory: Arc::new(inventory_with_stock(3)),
            logger: mock_logger(),
        };

        let cart = use_case.execute(add(1)).await.unwrap();

        let item = cart.find(ProductId::new(1)).unwrap();
        assert_eq!(item.amount, 1);
        assert_eq!(item.title, "Running shoe 1");
        let persisted = Cart::from_snapshot(&storage.entry(KEY).unwrap()).unwrap();
        assert_eq!(persisted, cart);
    }

    #[tokio::test]
    async fn should_increment_existing_line_item_without_refetching_product() {
        let (store, _) = store_with(&Cart::empty().with_item(line_item(1, 1))).await;
        let mut inventory = MockInventory::new();
        inventory
            .expect_get_stock()
            .returning(|id| Ok(stock(id, 5)));
        inventory.expect_get_product().never();

        let use_case = AddProductUseCaseImpl {
            store,
            inventory: Arc::new(inventory),
            logger: mock_logger(),
        };

        let cart = use_case.execute(add(1)).await.unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.amount_of(ProductId::new(1)), 2);
    }

    #[tokio::test]
    async fn should_stop_at_available_stock() {
        let (store, storage) = store_with(&Cart::empty()).await;

        let use_case = AddProductUseCaseImpl {
            store: store.clone(),
            inventory: Arc::new(inventory_with_stock(2)),
            logger: mock_logger(),
        };

        let first = use_case.execute(add(1)).await.unwrap();
        assert_eq!(first.amount_of(ProductId::new(1)), 1);

        let second = use_case.execute(add(1)).await.unwrap();
        assert_eq!(second.amount_of(ProductId::new(1)), 2);

        let third = use_case.execute(add(1)).await;
        assert!(matches!(third.unwrap_err(), CartError::OutOfStock));

        assert_eq!(store.current().await.amount_of(ProductId::new(1)), 2);
        let persisted = Cart::from_snapshot(&storage.entry(KEY).unwrap()).unwrap();
        assert_eq!(persisted.amount_of(ProductId::new(1)), 2);
    }

    #[tokio::test]
    async fn should_reject_first_add_when_stock_is_zero() {
        let (store, storage) = store_with(&Cart::empty()).await;
        let mut inventory = MockInventory::new();
        inventory
            .expect_get_stock()
            .returning(|id| Ok(stock(id, 0)));
        inventory.expect_get_product().never();

        let use_case = AddProductUseCaseImpl {
            store: store.clone(),
            inventory: Arc::new(inventory),
            logger: mock_logger(),
        };

        let result = use_case.execute(add(9)).await;

        assert!(matches!(result.unwrap_err(), CartError::OutOfStock));
        assert!(store.current().await.is_empty());
        assert_eq!(storage.writes(), 0);
    }

    #[tokio::test]
    async fn should_report_add_failed_when_stock_lookup_fails() {
        let saved = Cart::empty().with_item(line_item(2, 1));
        let (store, storage) = store_with(&saved).await;
        let mut inventory = MockInventory::new();
        inventory
            .expect_get_stock()
            .returning(|_| Err(InventoryError::Unavailable));

        let use_case = AddProductUseCaseImpl {
            store: store.clone(),
            inventory: Arc::new(inventory),
            logger: mock_logger(),
        };

        let result = use_case.execute(add(2)).await;

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "cart.add_failed");
        assert!(matches!(
            err,
            CartError::GatewayFailure {
                operation: CartOperation::Add,
                source: InventoryError::Unavailable
            }
        ));
        assert_eq!(store.current().await, saved);
        assert_eq!(storage.writes(), 0);
    }

    #[tokio::test]
    async fn should_report_add_failed_when_product_lookup_fails() {
        let (store, storage) = store_with(&Cart::empty()).await;
        let mut inventory = MockInventory::new();
        inventory
            .expect_get_stock()
            .returning(|id| Ok(stock(id, 4)));
        inventory
            .expect_get_product()
            .returning(|_| Err(InventoryError::NotFound));

        let use_case = AddProductUseCaseImpl {
            store: store.clone(),
            inventory: Arc::new(inventory),
            logger: mock_logger(),
        };

        let result = use_case.execute(add(3)).await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::GatewayFailure {
                operation: CartOperation::Add,
                ..
            }
        ));
        assert!(store.current().await.is_empty());
        assert_eq!(storage.writes(), 0);
    }

    #[tokio::test]
    async fn should_append_new_products_after_existing_ones() {
        let (store, _) = store_with(&Cart::empty().with_item(line_item(5, 1))).await;

        let use_case = AddProductUseCaseImpl {
            store,
            inventory: Arc::new(inventory_with_stock(10)),
            logger: mock_logger(),
        };

        use_case.execute(add(2)).await.unwrap();
        let cart = use_case.execute(add(5)).await.unwrap();

        let ids: Vec<u64> = cart.items().iter().map(|i| i.product_id.value()).collect();
        assert_eq!(ids, vec![5, 2]);
        assert_eq!(cart.amount_of(ProductId::new(5)), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_not_lose_concurrent_adds() {
        let (store, storage) = store_with(&Cart::empty()).await;
        let use_case = Arc::new(AddProductUseCaseImpl {
            store: store.clone(),
            inventory: Arc::new(SlowInventory::new(&[(1, 5)])),
            logger: mock_logger(),
        });

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let use_case = use_case.clone();
                tokio::spawn(async move { use_case.execute(add(1)).await })
            })
            .collect();

        let mut accepted = 0;
        let mut out_of_stock = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => accepted += 1,
                Err(CartError::OutOfStock) => out_of_stock += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(accepted, 5);
        assert_eq!(out_of_stock, 3);
        let cart = store.current().await;
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.amount_of(ProductId::new(1)), 5);
        let persisted = Cart::from_snapshot(&storage.entry(KEY).unwrap()).unwrap();
        assert_eq!(persisted, cart);
    }

    #[tokio::test]
    async fn should_keep_added_item_in_memory_when_snapshot_write_fails() {
        let saved = Cart::empty().with_item(line_item(1, 1));
        let (store, storage) = store_with(&saved).await;
        storage.fail_next_writes(2);

        let use_case = AddProductUseCaseImpl {
            store: store.clone(),
            inventory: Arc::new(inventory_with_stock(3)),
            logger: mock_logger(),
        };

        let result = use_case.execute(add(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::PersistenceFailure(_)
        ));
        assert_eq!(store.current().await.amount_of(ProductId::new(1)), 2);
        assert_eq!(storage.writes(), 0);
        let persisted = Cart::from_snapshot(&storage.entry(KEY).unwrap()).unwrap();
        assert_eq!(persisted, saved);
    }
}
