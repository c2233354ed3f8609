use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Shown whenever the remote chat collaborator cannot produce a reply.
pub const UPSTREAM_FAILURE_MESSAGE: &str =
    "Failed to connect to AI. Please check your API key or internet connection.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Chat service error: {0}")]
    Upstream(String),

    #[error("Mood log I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Mood log CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            AppError::Upstream(detail) => {
                tracing::warn!(error = %detail, "Chat collaborator failed");
                (StatusCode::BAD_GATEWAY, UPSTREAM_FAILURE_MESSAGE.into())
            }
            AppError::Io(e) => {
                tracing::error!(error = %e, "Mood log I/O error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save or read the mood log".into(),
                )
            }
            AppError::Csv(e) => {
                tracing::error!(error = %e, "Mood log CSV error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save or read the mood log".into(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        let body = json!({
            "error": {
                "message": message,
                "code": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
