//! Error types shared by the store and the HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Failures of the record store's backing file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse data file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Errors surfaced to HTTP callers as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Query parameter is required")]
    MissingQuery,
    #[error("All fields are required")]
    MissingFields,
    #[error("Failed to save data")]
    Storage(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingQuery | ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Storage(source) => tracing::error!("Request failed: {}", source),
            _ => tracing::warn!("Rejected request: {}", self),
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
