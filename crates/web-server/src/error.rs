use crate::dto::MessageResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use configuration::InvalidInputPolicy;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Missing or malformed input, reported back to the client.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Missing or malformed input, surfaced as an opaque server failure.
    #[error("Unhandled invalid input: {0}")]
    UnhandledInput(String),
}

impl AppError {
    /// Builds the invalid-input error the configured policy asks for.
    pub fn invalid_input(policy: InvalidInputPolicy, message: impl Into<String>) -> Self {
        match policy {
            InvalidInputPolicy::BadRequest => AppError::InvalidInput(message.into()),
            InvalidInputPolicy::InternalError => AppError::UnhandledInput(message.into()),
        }
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Conflict(message) => (StatusCode::CONFLICT, message),
            AppError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            AppError::UnhandledInput(message) => {
                tracing::error!(%message, "Request input could not be parsed.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}
