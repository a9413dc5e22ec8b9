// src/api/http/router.rs
// HTTP router composition for the REST endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::chat::chat_handler;
use super::handlers::health_handler;
use crate::state::AppState;

/// Main HTTP router: health probe plus the chat turn endpoint.
pub fn http_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .with_state(app_state)
}
