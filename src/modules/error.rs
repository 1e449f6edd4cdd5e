use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::services::llm::LlmError;

pub const CHAT_FAILURE_MESSAGE: &str = "Failed to get AI response. Please try again.";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Frontend dev server unavailable";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Every failure the gateway reports; always rendered as a `{"error": ...}` envelope.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("provider failure: {0}")]
    Provider(#[from] LlmError),
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("{0}")]
    Upstream(String),
}

impl AppError {
    pub fn store(context: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::Store { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Provider(_) | AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message shown to the caller. Provider and store detail stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Provider(_) => CHAT_FAILURE_MESSAGE.to_string(),
            AppError::Store { context, .. } => context.to_string(),
            AppError::Upstream(_) => UPSTREAM_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        AppError::Validation(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Provider(e) => tracing::error!(error = %e, "AI provider call failed"),
            AppError::Store { context, source } => {
                tracing::error!(error = %source, "{}", context)
            }
            AppError::Upstream(e) => tracing::warn!(error = %e, "{}", UPSTREAM_FAILURE_MESSAGE),
            _ => {}
        }

        (
            self.status(),
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}
