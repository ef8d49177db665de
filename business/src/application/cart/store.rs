use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::logger::Logger;
use crate::domain::storage::KeyValueStore;

const PERSIST_ATTEMPTS: usize = 2;

/// Owner of the committed cart and of its persisted snapshot.
///
/// Mutations are serialized through [`CartStore::begin`]: a mutation holds the
/// store's writer lock from the moment it reads the current cart until it is
/// committed or dropped, so no two mutations ever start from the same
/// snapshot. Readers only touch the committed value and never wait on an
/// in-flight inventory lookup.
pub struct CartStore {
    committed: RwLock<Cart>,
    writer: Mutex<()>,
    storage: Arc<dyn KeyValueStore>,
    logger: Arc<dyn Logger>,
    storage_key: String,
}

impl CartStore {
    /// Restores the cart saved under `storage_key`.
    ///
    /// A missing, unreadable or invalid snapshot yields an empty cart.
    pub async fn load(
        storage: Arc<dyn KeyValueStore>,
        logger: Arc<dyn Logger>,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();

        let cart = match storage.read(&storage_key).await {
            Ok(Some(raw)) => match Cart::from_snapshot(&raw) {
                Ok(cart) => {
                    logger.info(&format!(
                        "Restored cart with {} line items from '{}'",
                        cart.len(),
                        storage_key
                    ));
                    cart
                }
                Err(err) => {
                    logger.warn(&format!(
                        "Discarding invalid cart snapshot under '{}': {}",
                        storage_key, err
                    ));
                    Cart::empty()
                }
            },
            Ok(None) => {
                logger.info(&format!("No cart saved under '{}', starting empty", storage_key));
                Cart::empty()
            }
            Err(err) => {
                logger.warn(&format!(
                    "Could not read cart under '{}', starting empty: {}",
                    storage_key, err
                ));
                Cart::empty()
            }
        };

        Self {
            committed: RwLock::new(cart),
            writer: Mutex::new(()),
            storage,
            logger,
            storage_key,
        }
    }

    /// Last committed cart.
    pub async fn current(&self) -> Cart {
        self.committed.read().await.clone()
    }

    /// Starts a mutation. Waits for any mutation in progress to finish first.
    pub async fn begin(&self) -> CartMutation<'_> {
        let guard = self.writer.lock().await;
        let current = self.committed.read().await.clone();

        CartMutation {
            store: self,
            _guard: guard,
            current,
        }
    }

    async fn persist(&self, snapshot: &str) -> Result<(), CartError> {
        let mut attempt = 1;
        loop {
            match self.storage.write(&self.storage_key, snapshot).await {
                Ok(()) => return Ok(()),
                Err(err) if attempt < PERSIST_ATTEMPTS => {
                    self.logger.warn(&format!(
                        "Writing cart snapshot failed (attempt {}), retrying: {}",
                        attempt, err
                    ));
                    attempt += 1;
                }
                Err(err) => {
                    self.logger.error(&format!(
                        "Cart snapshot under '{}' is out of date, write failed: {}",
                        self.storage_key, err
                    ));
                    return Err(CartError::PersistenceFailure(err));
                }
            }
        }
    }
}

/// Exclusive, uncommitted change to a [`CartStore`].
///
/// Dropping a mutation without calling [`CartMutation::commit`] leaves the
/// store untouched.
pub struct CartMutation<'a> {
    store: &'a CartStore,
    _guard: MutexGuard<'a, ()>,
    current: Cart,
}

impl CartMutation<'_> {
    /// Cart the mutation started from.
    pub fn current(&self) -> &Cart {
        &self.current
    }

    /// Replaces the committed cart with `next` and writes its snapshot.
    ///
    /// The in-memory commit stands even when the write fails; the error is
    /// then `PersistenceFailure` and the next successful commit catches the
    /// snapshot up.
    pub async fn commit(self, next: Cart) -> Result<Cart, CartError> {
        let snapshot = next.to_snapshot()?;

        *self.store.committed.write().await = next.clone();
        self.store.persist(&snapshot).await?;

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::{MemoryStore, line_item, mock_logger};
    use crate::domain::shared::value_objects::ProductId;

    const KEY: &str = "cart:test";

    #[tokio::test]
    async fn should_start_empty_when_nothing_saved() {
        let storage = Arc::new(MemoryStore::new());

        let store = CartStore::load(storage, mock_logger(), KEY).await;

        assert!(store.current().await.is_empty());
    }

    #[tokio::test]
    async fn should_restore_saved_cart() {
        let saved = Cart::empty().with_item(line_item(1, 2));
        let storage = Arc::new(MemoryStore::with_entry(KEY, &saved.to_snapshot().unwrap()));

        let store = CartStore::load(storage, mock_logger(), KEY).await;

        assert_eq!(store.current().await, saved);
    }

    #[tokio::test]
    async fn should_fall_back_to_empty_when_snapshot_corrupt() {
        let storage = Arc::new(MemoryStore::with_entry(KEY, "[{\"id\":"));

        let store = CartStore::load(storage, mock_logger(), KEY).await;

        assert!(store.current().await.is_empty());
    }

    #[tokio::test]
    async fn should_fall_back_to_empty_when_read_fails() {
        let storage = Arc::new(MemoryStore::new());
        storage.fail_reads();

        let store = CartStore::load(storage, mock_logger(), KEY).await;

        assert!(store.current().await.is_empty());
    }

    #[tokio::test]
    async fn should_persist_committed_cart() {
        let storage = Arc::new(MemoryStore::new());
        let store = CartStore::load(storage.clone(), mock_logger(), KEY).await;
        let next = Cart::empty().with_item(line_item(3, 1));

        let committed = store.begin().await.commit(next.clone()).await.unwrap();

        assert_eq!(committed, next);
        assert_eq!(store.current().await, next);
        let persisted = Cart::from_snapshot(&storage.entry(KEY).unwrap()).unwrap();
        assert_eq!(persisted, next);
    }

    #[tokio::test]
    async fn should_leave_store_untouched_when_mutation_dropped() {
        let storage = Arc::new(MemoryStore::new());
        let store = CartStore::load(storage.clone(), mock_logger(), KEY).await;

        {
            let mutation = store.begin().await;
            assert!(mutation.current().is_empty());
        }

        assert!(store.current().await.is_empty());
        assert_eq!(storage.writes(), 0);
    }

    #[tokio::test]
    async fn should_retry_snapshot_write_once() {
        let storage = Arc::new(MemoryStore::new());
        storage.fail_next_writes(1);
        let store = CartStore::load(storage.clone(), mock_logger(), KEY).await;
        let next = Cart::empty().with_item(line_item(1, 1));

        let result = store.begin().await.commit(next.clone()).await;

        assert!(result.is_ok());
        assert_eq!(storage.writes(), 1);
        assert!(storage.entry(KEY).is_some());
    }

    #[tokio::test]
    async fn should_keep_memory_state_when_snapshot_write_keeps_failing() {
        let storage = Arc::new(MemoryStore::new());
        storage.fail_next_writes(2);
        let store = CartStore::load(storage.clone(), mock_logger(), KEY).await;
        let next = Cart::empty().with_item(line_item(1, 1));

        let result = store.begin().await.commit(next.clone()).await;

        assert!(matches!(result.unwrap_err(), CartError::PersistenceFailure(_)));
        assert_eq!(store.current().await, next);
        assert!(storage.entry(KEY).is_none());
    }

    #[tokio::test]
    async fn should_start_next_mutation_from_last_commit() {
        let storage = Arc::new(MemoryStore::new());
        let store = CartStore::load(storage, mock_logger(), KEY).await;

        store
            .begin()
            .await
            .commit(Cart::empty().with_item(line_item(1, 1)))
            .await
            .unwrap();
        let mutation = store.begin().await;

        assert_eq!(mutation.current().amount_of(ProductId::new(1)), 1);
    }
}
