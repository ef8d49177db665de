use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::storage::KeyValueStore;

use super::entity::KeyValueEntity;

pub struct KeyValueStorePostgres {
    pool: PgPool,
}

impl KeyValueStorePostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for KeyValueStorePostgres {
    async fn read(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entity = sqlx::query_as::<_, KeyValueEntity>(
            "SELECT key, value, updated_at FROM key_value_entries WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::database_error())?;

        if let Some(entity) = &entity {
            tracing::debug!(key = %entity.key, updated_at = %entity.updated_at, "key-value entry loaded");
        }

        Ok(entity.map(|e| e.value))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO key_value_entries (key, value, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::persistence())?;

        Ok(())
    }
}
