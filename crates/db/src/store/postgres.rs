//! PostgreSQL-backed document store.
//!
//! Records live in a single `passengers` table: a UUID primary key the
//! database generates, plus one JSONB column holding the field mapping.

use async_trait::async_trait;
use paxport_core::types::{DbId, Document};
use serde_json::Value;
use sqlx::PgPool;

use super::{DocumentStore, StoreError};

/// Document store over the `passengers` table.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, fields: Document) -> Result<DbId, StoreError> {
        let id: DbId =
            sqlx::query_scalar("INSERT INTO passengers (fields) VALUES ($1) RETURNING id")
                .bind(Value::Object(fields))
                .fetch_one(&self.pool)
                .await?;
        tracing::debug!(id = %id, "Inserted passenger document");
        Ok(id)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Document>, StoreError> {
        let value: Option<Value> =
            sqlx::query_scalar("SELECT fields FROM passengers WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(value.and_then(|v| match v {
            Value::Object(fields) => Some(fields),
            _ => None,
        }))
    }

    async fn merge_by_id(&self, id: DbId, fields: Document) -> Result<u64, StoreError> {
        // `||` overwrites exactly the keys present in the payload.
        let result = sqlx::query("UPDATE passengers SET fields = fields || $2 WHERE id = $1")
            .bind(id)
            .bind(Value::Object(fields))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM passengers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(id = %id, deleted = result.rows_affected(), "Delete passenger document");
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
