// src/api/http/chat.rs

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::api::error::ApiError;
use crate::chat::{process_turn, ChatMessage};
use crate::chat::language::Language;
use crate::persona::Personality;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub personality: Option<String>,
    pub language: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// One conversation turn: the full history comes in, the personalized reply
/// text goes out. Unrecognized personality or language labels fall back to
/// their defaults rather than failing the request.
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let personality = request
        .personality
        .as_deref()
        .and_then(|s| s.parse::<Personality>().ok())
        .unwrap_or_default();
    let language = request
        .language
        .as_deref()
        .and_then(|s| s.parse::<Language>().ok())
        .unwrap_or_default();

    info!(
        "Processing chat request: {} messages, personality: {}",
        request.messages.len(),
        personality
    );

    match process_turn(&state.llm_client, &request.messages, personality, language).await {
        Ok(text) => Json(ChatResponse { response: text }).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}
