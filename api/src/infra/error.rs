use appointment_notifier::error::{NotificationError, INTERNAL_SERVER_ERROR};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use tracing::{error, info};

/// Error rendered to callers as `{"error": message}`. `cause` is only logged.
#[derive(Debug)]
pub struct AppError {
    pub status_code: StatusCode,
    pub cause: String,
    pub message: Option<String>,
}

impl AppError {
    pub fn new(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn internal(cause: &str) -> Self {
        Self::new(cause, INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.message.unwrap_or(INTERNAL_SERVER_ERROR.to_string());

        if self.status_code.is_server_error() {
            error!(cause = %self.cause, status = %self.status_code, "{message}");
        } else if self.status_code.is_client_error() {
            info!(cause = %self.cause, status = %self.status_code, "{message}");
        }

        (self.status_code, Json(json!({ "error": message }))).into_response()
    }
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}

impl From<NotificationError> for AppError {
    fn from(inner: NotificationError) -> Self {
        Self {
            status_code: StatusCode::from_u16(inner.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            cause: inner.cause,
            message: inner.message,
        }
    }
}

// Unreadable bodies are reported like any other unexpected failure.
impl From<JsonRejection> for AppError {
    fn from(inner: JsonRejection) -> Self {
        Self::internal(&format!("Failed to read request body ({}): {}", inner.status(), inner.body_text()))
    }
}
