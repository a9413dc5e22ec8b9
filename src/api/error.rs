// src/api/error.rs
// Centralized error handling for HTTP API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use tracing::error;

use crate::chat::ChatError;

/// Standard API error response format: `{"error": message}` plus a status
/// code, matching what the browser client expects.
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Maps the turn-processing taxonomy onto HTTP statuses. Upstream detail is
/// logged here and replaced with a generic message; rate limiting keeps its
/// own status so the client can choose retry-later UX.
impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::InvalidHistory => {
                ApiError::bad_request("No user message to respond to.")
            }
            ChatError::RateLimited => {
                ApiError::rate_limited("Rate limit exceeded. Please try again in a moment.")
            }
            ChatError::Misconfigured => {
                error!("Chat request rejected: completion API key is not configured");
                ApiError::internal("The assistant is not configured yet. Please try again later.")
            }
            ChatError::InferenceFailed(detail) => {
                error!("Completion request failed: {}", detail);
                ApiError::internal("Something went wrong while generating a response.")
            }
        }
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
