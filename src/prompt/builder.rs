// src/prompt/builder.rs
// Assembles the per-turn system instruction: personality voice, memory
// block, emotional guidance, behavioral guidelines, conversation-length
// note, language directive. Section order is fixed.

use crate::chat::emotion::Emotion;
use crate::chat::language::Language;
use crate::chat::memory::MemoryFacts;
use crate::persona::Personality;

/// Buckets a UTC hour into a coarse time-of-day reference. Kept pure so the
/// caller supplies the clock.
pub fn time_of_day(utc_hour: u32) -> &'static str {
    match utc_hour {
        5..=11 => "morning",
        12..=16 => "afternoon",
        17..=20 => "evening",
        _ => "night",
    }
}

/// Builds the complete system instruction preceding the normalized history.
pub fn build_system_prompt(
    personality: Personality,
    facts: &MemoryFacts,
    emotion: Emotion,
    language: Language,
    history_len: usize,
    time_of_day: &str,
) -> String {
    let mut memory_context = String::new();
    if let Some(name) = &facts.user_name {
        memory_context.push_str(&format!(
            "\nUSER NAME: The user's name is {name}. Use their name occasionally \
             (not every message) to make the conversation personal."
        ));
    }
    // Trends from very short histories are low-confidence and left out.
    if facts.mood_trend != Emotion::Neutral && history_len > 2 {
        memory_context.push_str(&format!(
            "\nMOOD TREND: Throughout this conversation, the user has mostly been \
             feeling {}. Keep this in mind.",
            facts.mood_trend
        ));
    }
    memory_context.push_str(&format!(
        "\nTIME CONTEXT: It's {time_of_day} for the user. You can reference this \
         naturally if appropriate."
    ));

    let conversation_context = if history_len > 2 {
        format!(
            "\n\nConversation context: This is message {history_len} in the \
             conversation. Reference earlier topics naturally when relevant."
        )
    } else {
        String::new()
    };

    format!(
        "{personality_prompt}\n\
         {memory_context}\n\n\
         EMOTIONAL CONTEXT: {emotion_guidance}\n\n\
         IMPORTANT GUIDELINES:\n\
         - Keep responses concise and conversational (2-4 sentences unless more detail is truly needed)\n\
         - Show genuine interest by asking follow-up questions\n\
         - Reference earlier parts of the conversation when relevant\n\
         - Never provide medical or mental health diagnoses - you're a supportive friend, not a therapist\n\
         - If someone expresses serious distress, gently encourage them to reach out to a professional or trusted person\n\
         {conversation_context}\n\n\
         {language_instruction}",
        personality_prompt = personality.prompt(),
        memory_context = memory_context,
        emotion_guidance = emotion.guidance(),
        conversation_context = conversation_context,
        language_instruction = language.instruction(),
    )
}
