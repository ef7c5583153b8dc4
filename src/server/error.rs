//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`screenscore_common::Error`] so that route
//! handlers can return `Result<T, AppError>` and every failure still renders
//! a JSON error page.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use screenscore_common::Error;
use serde_json::json;

/// Message shown for failures whose detail stays in the logs.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Try again.";

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError {
    inner: Error,
    message: Option<String>,
}

impl AppError {
    pub fn new(inner: Error) -> Self {
        Self {
            inner,
            message: None,
        }
    }

    /// Replace the user-facing message while keeping status and code.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn user_message(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        match &self.inner {
            Error::InvalidInput(message) => message.clone(),
            upstream @ Error::Upstream { .. } => upstream.to_string(),
            Error::Request(_) | Error::Decode(_) | Error::Internal(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in API handler"
            );
        }

        let body = json!({
            "error": self.user_message(),
            "code": self.inner.code(),
        });

        (status, axum::Json(body)).into_response()
    }
}
