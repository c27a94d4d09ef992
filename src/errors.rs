use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::db_storage::StoreError;

/// Application-specific error types.
#[derive(Debug)]
pub enum AppError {
    /// Request body failed to parse or validate. Never reaches the store.
    Validation(String),
    /// The document store rejected or failed a write.
    Persistence(StoreError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Persistence(e) => write!(f, "Persistence error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    /// Maps each variant to a status code and a `{"detail": ...}` body.
    ///
    /// Store errors are passed through verbatim. The API is a public
    /// marketing surface with no authenticated state, so the raw text is
    /// returned to the caller.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected request body: {}", msg);
                msg
            }
            AppError::Persistence(e) => {
                tracing::error!("Document store error: {}", e);
                e.to_string()
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Persistence(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_422() {
        let err = AppError::Validation("name too short".to_string());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "Validation error: name too short");
    }

    #[test]
    fn persistence_maps_to_500() {
        let err = AppError::from(StoreError::Unavailable);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("Database not available"));
    }
}
