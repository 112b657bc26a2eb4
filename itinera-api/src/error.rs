use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use itinera_domain::DirectoryError;

#[derive(Debug)]
pub enum AppError {
    InvalidCustomerId,
    CustomerNotFound,
    Database(Box<dyn std::error::Error + Send + Sync>),
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::NotFound(_) => AppError::CustomerNotFound,
            DirectoryError::Database(source) => AppError::Database(source),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidCustomerId => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid customer ID" })),
            )
                .into_response(),
            AppError::CustomerNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Customer not found" })),
            )
                .into_response(),
            AppError::Database(source) => {
                // Full detail stays server-side; the body is opaque.
                tracing::error!(error = %source, "database error during lookup");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Database error" })),
                )
                    .into_response()
            }
        }
    }
}
