//! API error mapping.
//!
//! Core and assistant errors are operation outcomes, not server faults:
//! they map to client-facing status codes with their message intact. Only
//! genuine upstream failures (completion provider down) become 5xx.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use foliopulse_ai::AssistantError;
use foliopulse_core::errors::{Error as CoreError, ValidationError};

pub type ApiResult<T> = Result<T, ApiError>;

pub enum ApiError {
    Core(CoreError),
    Assistant(AssistantError),
    /// The assistant endpoint was called without an API key configured.
    AssistantUnavailable,
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::Core(err)
    }
}

impl From<AssistantError> for ApiError {
    fn from(err: AssistantError) -> Self {
        ApiError::Assistant(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::HoldingNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Core(CoreError::Validation(ValidationError::DuplicateSymbol(_))) => {
                StatusCode::CONFLICT
            }
            ApiError::Core(CoreError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Assistant(AssistantError::EmptyQuestion) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Assistant(_) => StatusCode::BAD_GATEWAY,
            ApiError::AssistantUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Core(err) => err.to_string(),
            ApiError::Assistant(err) => err.to_string(),
            ApiError::AssistantUnavailable => {
                "Assistant is not configured; set GEMINI_API_KEY".to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            tracing::error!("{} -> {}", message, status);
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
