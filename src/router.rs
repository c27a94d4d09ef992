use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::handlers::{self, AppState};

/// Maximum accepted request body (1 MiB).
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Builds the full route table with CORS, tracing and body-size layers.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/facilities", get(handlers::get_facilities))
        .route("/api/programs", get(handlers::get_programs))
        .route("/api/memberships", get(handlers::get_memberships))
        .route("/api/blogs", get(handlers::get_blogs))
        .route("/api/leads", post(handlers::create_lead))
        .route("/test", get(handlers::test_database))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        // Any origin, method and header, with credentials. The request origin is
        // mirrored back because a literal `*` cannot be combined with credentials.
        .layer(CorsLayer::very_permissive())
}
