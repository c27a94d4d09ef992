use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use sqlx::PgPool;
use uuid::Uuid;

/// Errors raised by a [`DocumentStore`]. The `Display` text is what API
/// clients see when a write fails.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database not available. Check DATABASE_URL and DATABASE_NAME environment variables.")]
    Unavailable,
    #[error("{0}")]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Serialization(#[from] serde_json::Error),
    /// Failure reported by a store backend that is not sqlx-based.
    #[error("{0}")]
    Backend(String),
}

/// Generic document persistence used by the handlers.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Human-readable name of the underlying database.
    fn name(&self) -> &str;

    /// Inserts `record` into `collection` and returns the assigned id.
    async fn create_document(&self, collection: &str, record: &Value)
        -> Result<String, StoreError>;

    /// Names of all collections that hold at least one document.
    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;
}

/// Document store backed by a single Postgres `documents` table.
pub struct PgDocumentStore {
    pool: PgPool,
    name: String,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool, name: impl Into<String>) -> Self {
        Self {
            pool,
            name: name.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_document(
        &self,
        collection: &str,
        record: &Value,
    ) -> Result<String, StoreError> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let data = stamp_document(record, now);

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, data, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(collection)
        .bind(data)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Document {} inserted into '{}'", id, collection);
        Ok(id.to_string())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }
}

/// Adds `created_at`/`updated_at` to an object record. Non-object records are
/// stored as-is.
pub fn stamp_document(record: &Value, now: DateTime<Utc>) -> Value {
    let mut data = record.clone();
    if let Value::Object(map) = &mut data {
        map.insert("created_at".to_string(), json!(now));
        map.insert("updated_at".to_string(), json!(now));
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_adds_matching_timestamps() {
        let now = Utc::now();
        let stamped = stamp_document(&json!({"name": "Jo"}), now);

        assert_eq!(stamped["name"], "Jo");
        assert_eq!(stamped["created_at"], stamped["updated_at"]);
        assert_eq!(stamped["created_at"], json!(now));
    }

    #[test]
    fn stamp_leaves_non_objects_untouched() {
        let stamped = stamp_document(&json!(["a", "b"]), Utc::now());
        assert_eq!(stamped, json!(["a", "b"]));
    }

    #[test]
    fn store_error_text_is_raw() {
        let err = StoreError::Backend("duplicate key value".to_string());
        assert_eq!(err.to_string(), "duplicate key value");
    }
}
