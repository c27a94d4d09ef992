use std::env;

use serde_json::json;

use coremotion_api::db::Database;
use coremotion_api::db_storage::{DocumentStore, PgDocumentStore};
use coremotion_api::models::LEAD_COLLECTION;

/// Integration smoke test for the Postgres document store.
/// Marked ignored to avoid running against production by accident; set TEST_DATABASE_URL to run.
#[tokio::test]
#[ignore]
async fn create_lead_document_smoke_test() -> anyhow::Result<()> {
    let db_url = env::var("TEST_DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("Set TEST_DATABASE_URL to run this test"))?;

    let db = Database::new(&db_url).await?;
    let name = db.current_database().await?;
    let store = PgDocumentStore::new(db.pool.clone(), name);

    let id = store
        .create_document(
            LEAD_COLLECTION,
            &json!({
                "name": "Smoke Test",
                "email": "smoke@example.com",
                "phone": null,
                "interest": "membership",
                "message": null
            }),
        )
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    assert!(!id.is_empty());

    let stored: serde_json::Value =
        sqlx::query_scalar("SELECT data FROM documents WHERE id = $1::uuid")
            .bind(&id)
            .fetch_one(&db.pool)
            .await?;
    assert_eq!(stored["email"], "smoke@example.com");
    assert!(stored["created_at"].is_string());

    let collections = store
        .list_collection_names()
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    assert!(collections.iter().any(|c| c == LEAD_COLLECTION));

    Ok(())
}
