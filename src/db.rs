use std::sync::Arc;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::Config;
use crate::db_storage::{DocumentStore, PgDocumentStore};

const CREATE_DOCUMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    id          UUID PRIMARY KEY,
    collection  TEXT NOT NULL,
    data        JSONB NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL,
    updated_at  TIMESTAMPTZ NOT NULL
)
"#;

const CREATE_COLLECTION_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS documents_collection_idx ON documents (collection)";

pub struct Database {
    pub pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        sqlx::query(CREATE_DOCUMENTS_TABLE).execute(&pool).await?;
        sqlx::query(CREATE_COLLECTION_INDEX).execute(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn current_database(&self) -> anyhow::Result<String> {
        let name = sqlx::query_scalar::<_, String>("SELECT current_database()")
            .fetch_one(&self.pool)
            .await?;
        Ok(name)
    }
}

/// Builds the document store for this process, if one is configured.
///
/// Returns `Ok(None)` when `DATABASE_URL` is unset. A connection failure is
/// returned to the caller, which keeps the service running without a store:
/// catalog routes keep working, lead submissions report the store as
/// unavailable and `/test` shows the error.
pub async fn connect_store(config: &Config) -> anyhow::Result<Option<Arc<dyn DocumentStore>>> {
    let Some(ref url) = config.database_url else {
        tracing::warn!("⚠️  DATABASE_URL not set, running without a document store");
        return Ok(None);
    };

    let db = Database::new(url).await?;

    let name = match &config.database_name {
        Some(name) => name.clone(),
        None => db.current_database().await.unwrap_or_else(|e| {
            tracing::warn!("Could not resolve database name: {}", e);
            "unknown".to_string()
        }),
    };

    tracing::info!("✓ Document store connected: {}", name);
    Ok(Some(Arc::new(PgDocumentStore::new(db.pool, name))))
}
