use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gazetteer_core::CoreError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Server-specific error types, one per externally observable failure.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The model or index never initialized; permanent until restart.
    #[error("Service not ready")]
    NotReady,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// The search produced zero candidates (empty corpus).
    #[error("No results found")]
    NoMatch,

    #[error("Core lookup error: {0}")]
    Core(#[from] CoreError), // Automatically convert from CoreError

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Implement IntoResponse for ServerError to automatically convert errors
// into HTTP responses.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ServerError::NotReady => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Model not loaded. Please try again later.".to_string(),
            ),
            ServerError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ServerError::NoMatch => (StatusCode::NOT_FOUND, "No results found".to_string()),
            ServerError::Core(core_err) => {
                // Anything escaping the lookup path is unexpected; log the
                // detail, answer with a generic message.
                error!(error = %core_err, "Lookup failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal server error: {}", core_err),
                )
            }
            ServerError::Internal(msg) => {
                error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal server error: {}", msg),
                )
            }
        };

        error!("Responding with status {}: {}", status, error_message);

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

// Define a Result type alias for handler functions
pub type ServerResult<T> = Result<T, ServerError>;
