use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Durable key-value store holding serialized snapshots.
///
/// `write` overwrites whatever was stored under the key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn write(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
}
