use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Message shown to users whenever the provider can't be reached or misbehaves.
/// Provider details stay in the logs.
pub const PROVIDER_FAILURE_MESSAGE: &str =
    "We couldn't reach the streaming catalog right now. Please try again later.";

const INTERNAL_FAILURE_MESSAGE: &str = "Something went wrong on our side. Please try again later.";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Provider transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// True for failures that originate with the availability provider
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, AppError::Provider(_) | AppError::Transport(_))
    }

    /// Text that is safe to show to an end user
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(_) => "We couldn't find that title.".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Provider(_) | AppError::Transport(_) => PROVIDER_FAILURE_MESSAGE.to_string(),
            AppError::Config(_) | AppError::Internal(_) => INTERNAL_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
            AppError::Provider(_) | AppError::Transport(_) => {
                (StatusCode::BAD_GATEWAY, "provider_unavailable")
            }
            AppError::Config(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = Json(json!({
            "error": kind,
            "message": self.user_message(),
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
