use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::catalog::{self, BlogPost, Facility, MembershipTier, Programs, Stats};
use crate::config::Config;
use crate::db_storage::{DocumentStore, StoreError};
use crate::diagnostics::{self, DiagnosticReport};
use crate::errors::AppError;
use crate::models::{Lead, LeadCreated, LeadInput, LEAD_COLLECTION};

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Document store for lead submissions. `None` when no database is configured
    /// or the connection failed at startup.
    pub store: Option<Arc<dyn DocumentStore>>,
    /// Why the store could not be connected at startup, if it failed.
    pub startup_error: Option<String>,
}

impl AppState {
    pub fn new(config: Config, store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self {
            config,
            store,
            startup_error: None,
        }
    }

    pub fn with_startup_error(mut self, error: Option<String>) -> Self {
        self.startup_error = error;
        self
    }
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "CoreMotion Gym API is running" }))
}

/// GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/stats
pub async fn get_stats() -> Json<Stats> {
    Json(catalog::STATS)
}

/// GET /api/facilities
pub async fn get_facilities() -> Json<&'static [Facility]> {
    Json(catalog::FACILITIES)
}

/// GET /api/programs
pub async fn get_programs() -> Json<Programs> {
    Json(catalog::PROGRAMS)
}

/// GET /api/memberships
pub async fn get_memberships() -> Json<&'static [MembershipTier]> {
    Json(catalog::MEMBERSHIPS)
}

/// GET /api/blogs
pub async fn get_blogs() -> Json<&'static [BlogPost]> {
    Json(catalog::BLOGS)
}

/// POST /api/leads
///
/// Validates the lead form and writes it to the `lead` collection.
///
/// # Returns
///
/// * `200 {"status": "ok", "id": ...}` on success.
/// * `422` when the body is malformed or fails validation. The store is not touched.
/// * `500` with the store's error text when the write fails.
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LeadInput>, JsonRejection>,
) -> Result<Json<LeadCreated>, AppError> {
    let Json(input) = payload?;
    let lead = Lead::try_from(input)?;

    tracing::info!(
        "📨 Lead submission: interest={}",
        lead.interest().unwrap_or("-")
    );

    let store = state.store.as_ref().ok_or(StoreError::Unavailable)?;
    let record = serde_json::to_value(&lead).map_err(StoreError::from)?;
    let id = store.create_document(LEAD_COLLECTION, &record).await?;

    tracing::info!("✅ Lead stored: {}", id);
    Ok(Json(LeadCreated::ok(id)))
}

/// GET /test
///
/// Best-effort report on document store connectivity. Always 200.
pub async fn test_database(State(state): State<Arc<AppState>>) -> Json<DiagnosticReport> {
    let report = diagnostics::probe(
        state.store.as_deref(),
        state.startup_error.as_deref(),
        &state.config,
    )
    .await;
    Json(report)
}
