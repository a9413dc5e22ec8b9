// src/chat/turn.rs
// The per-turn pipeline: repair the history, classify the latest utterance,
// recall memory facts, assemble the system instruction, call the completion
// provider. One sequential pass, no state shared between turns.

use chrono::{Timelike, Utc};
use tracing::debug;

use crate::llm::CompletionClient;
use crate::persona::Personality;
use crate::prompt;

use super::error::ChatError;
use super::language::{self, Language};
use super::memory;
use super::types::ChatMessage;
use super::{emotion, history};

/// Processes one conversation turn and returns the assistant's reply text.
pub async fn process_turn(
    client: &CompletionClient,
    messages: &[ChatMessage],
    personality: Personality,
    requested_language: Language,
) -> Result<String, ChatError> {
    let normalized = history::normalize(messages);
    let last_user = normalized.last_user().ok_or(ChatError::InvalidHistory)?;

    let detected_emotion = emotion::detect(&last_user.content);
    let resolved_language = language::resolve(&last_user.content, requested_language);
    let facts = memory::extract(&normalized);

    debug!(
        emotion = %detected_emotion,
        language = %resolved_language,
        user_name = facts.user_name.as_deref().unwrap_or("unknown"),
        mood_trend = %facts.mood_trend,
        "classified latest utterance"
    );

    let system_prompt = prompt::build_system_prompt(
        personality,
        &facts,
        detected_emotion,
        resolved_language,
        normalized.len(),
        prompt::time_of_day(Utc::now().hour()),
    );

    client.complete(&system_prompt, &normalized).await
}
