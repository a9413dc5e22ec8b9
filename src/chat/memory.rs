// src/chat/memory.rs
// Lightweight long-term memory, recomputed from the full history on every
// turn. The server stays stateless; continuity comes from the client
// resending the whole conversation.

use once_cell::sync::Lazy;
use regex::Regex;

use super::emotion::{self, Emotion};
use super::history::NormalizedHistory;
use super::types::{ChatMessage, Role};

/// Facts worth carrying into the system prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryFacts {
    pub user_name: Option<String>,
    pub mood_trend: Emotion,
}

/// Self-introduction patterns, tried in order per message. Hindi and
/// Hinglish forms included alongside the English ones.
static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)my name is (\w+)",
        r"(?i)i'm (\w+)",
        r"(?i)i am (\w+)",
        r"(?i)call me (\w+)",
        r"(?i)this is (\w+)",
        r"(?i)मेरा नाम (\w+)",
        r"(?i)mera naam (\w+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("name pattern regex is valid"))
    .collect()
});

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 19;

pub fn extract(history: &NormalizedHistory) -> MemoryFacts {
    MemoryFacts {
        user_name: extract_user_name(history.messages()),
        mood_trend: mood_trend(history.messages()),
    }
}

/// Scans user messages oldest-first, patterns in declaration order per
/// message. The first capture within the length bounds wins; out-of-bounds
/// candidates are skipped and the scan continues.
fn extract_user_name(messages: &[ChatMessage]) -> Option<String> {
    for msg in messages.iter().filter(|m| m.role == Role::User) {
        for pattern in NAME_PATTERNS.iter() {
            let Some(candidate) = pattern
                .captures(&msg.content)
                .and_then(|caps| caps.get(1))
            else {
                continue;
            };
            let chars = candidate.as_str().chars().count();
            if (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
                return Some(candidate.as_str().to_string());
            }
        }
    }
    None
}

/// Classifies every user message and returns the most frequent label.
/// Counting includes `Neutral`; ties go to the label encountered first.
fn mood_trend(messages: &[ChatMessage]) -> Emotion {
    let mut counts: Vec<(Emotion, usize)> = Vec::new();
    for msg in messages.iter().filter(|m| m.role == Role::User) {
        let label = emotion::detect(&msg.content);
        match counts.iter_mut().find(|(e, _)| *e == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label, 1)),
        }
    }

    let mut trend = Emotion::Neutral;
    let mut best = 0;
    for &(label, n) in &counts {
        if n > best {
            trend = label;
            best = n;
        }
    }
    trend
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::history::normalize;

    fn facts_for(messages: Vec<ChatMessage>) -> MemoryFacts {
        extract(&normalize(&messages))
    }

    #[test]
    fn test_name_extraction_from_introduction() {
        let facts = facts_for(vec![ChatMessage::user("Hi, I'm Sam and I need advice")]);
        assert_eq!(facts.user_name.as_deref(), Some("Sam"));
    }

    #[test]
    fn test_name_patterns_in_later_messages() {
        let facts = facts_for(vec![
            ChatMessage::user("hello there"),
            ChatMessage::assistant("hey!"),
            ChatMessage::user("you can call me Priya"),
        ]);
        assert_eq!(facts.user_name.as_deref(), Some("Priya"));
    }

    #[test]
    fn test_hinglish_name_pattern() {
        let facts = facts_for(vec![ChatMessage::user("mera naam Arjun hai")]);
        assert_eq!(facts.user_name.as_deref(), Some("Arjun"));
    }

    #[test]
    fn test_name_length_bounds() {
        // One character is too short; the scan moves on and finds nothing.
        let facts = facts_for(vec![ChatMessage::user("I'm J")]);
        assert_eq!(facts.user_name, None);

        // Twenty characters is too long.
        let long = "A".repeat(20);
        let facts = facts_for(vec![ChatMessage::user(format!("call me {long}"))]);
        assert_eq!(facts.user_name, None);

        // A later message can still supply a valid name.
        let facts = facts_for(vec![
            ChatMessage::user("I'm J"),
            ChatMessage::assistant("nice to meet you"),
            ChatMessage::user("sorry, my name is Jo"),
        ]);
        assert_eq!(facts.user_name.as_deref(), Some("Jo"));
    }

    #[test]
    fn test_earliest_introduction_wins() {
        let facts = facts_for(vec![
            ChatMessage::user("my name is Alice"),
            ChatMessage::assistant("hi Alice"),
            ChatMessage::user("my name is Bob"),
        ]);
        assert_eq!(facts.user_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_no_introduction_means_no_name() {
        let facts = facts_for(vec![ChatMessage::user("what's the weather like?")]);
        assert_eq!(facts.user_name, None);
    }

    #[test]
    fn test_mood_trend_majority() {
        let facts = facts_for(vec![
            ChatMessage::user("I'm so sad today"),
            ChatMessage::assistant("I'm here for you"),
            ChatMessage::user("feeling happy now actually"),
            ChatMessage::assistant("glad to hear it"),
            ChatMessage::user("no wait, still sad"),
        ]);
        assert_eq!(facts.mood_trend, Emotion::Sad);
    }

    #[test]
    fn test_mood_trend_tie_goes_to_first_encountered() {
        let facts = facts_for(vec![
            ChatMessage::user("I'm so sad"),
            ChatMessage::assistant("oh no"),
            ChatMessage::user("actually feeling happy"),
        ]);
        assert_eq!(facts.mood_trend, Emotion::Sad);

        let facts = facts_for(vec![
            ChatMessage::user("feeling happy"),
            ChatMessage::assistant("great!"),
            ChatMessage::user("now I'm sad"),
        ]);
        assert_eq!(facts.mood_trend, Emotion::Happy);
    }

    #[test]
    fn test_assistant_messages_do_not_count_toward_trend() {
        let facts = facts_for(vec![
            ChatMessage::user("tell me a story"),
            ChatMessage::assistant("a sad, sad tale of woe"),
            ChatMessage::user("go on"),
        ]);
        assert_eq!(facts.mood_trend, Emotion::Neutral);
    }
}
