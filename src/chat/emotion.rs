// src/chat/emotion.rs
// Keyword-based emotion detection over the latest user utterance. A
// best-effort heuristic behind a small interface so it can be swapped for a
// real classifier without touching prompt assembly.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Sad,
    Stressed,
    Angry,
    Happy,
    Confused,
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Sad => "sad",
            Emotion::Stressed => "stressed",
            Emotion::Angry => "angry",
            Emotion::Happy => "happy",
            Emotion::Confused => "confused",
            Emotion::Neutral => "neutral",
        }
    }

    /// Canned guidance fragment steering response tone for this emotion.
    pub fn guidance(&self) -> &'static str {
        match self {
            Emotion::Sad => {
                "The user seems sad or lonely. Respond with extra warmth, empathy, and compassion. \
                 Validate their feelings and offer gentle support."
            }
            Emotion::Stressed => {
                "The user appears stressed or anxious. Help them feel calm. Suggest taking a deep \
                 breath. Be soothing and reassuring."
            }
            Emotion::Angry => {
                "The user seems frustrated or angry. Acknowledge their feelings without judgment. \
                 Be patient and understanding."
            }
            Emotion::Happy => {
                "The user is in a good mood! Match their energy with enthusiasm and positivity. \
                 Celebrate with them."
            }
            Emotion::Confused => {
                "The user needs guidance. Be patient, break things down simply, and offer clear, \
                 helpful advice."
            }
            Emotion::Neutral => "Maintain a friendly, supportive tone.",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration order doubles as the tie-break policy: when a message matches
/// keywords from several categories, the earlier row wins. `frustrated`
/// appears under both `stressed` and `angry`; the order makes it stressed.
const KEYWORD_TABLE: &[(Emotion, &[&str])] = &[
    (
        Emotion::Sad,
        &[
            "sad", "lonely", "depressed", "down", "unhappy", "crying", "hurt", "pain", "alone",
            "empty", "hopeless",
        ],
    ),
    (
        Emotion::Stressed,
        &[
            "stressed",
            "anxious",
            "overwhelmed",
            "worried",
            "nervous",
            "panic",
            "pressure",
            "tension",
            "frustrated",
        ],
    ),
    (
        Emotion::Angry,
        &[
            "angry", "mad", "furious", "annoyed", "irritated", "upset", "hate", "frustrated",
        ],
    ),
    (
        Emotion::Happy,
        &[
            "happy",
            "excited",
            "great",
            "amazing",
            "wonderful",
            "fantastic",
            "good",
            "awesome",
            "love",
            "grateful",
        ],
    ),
    (
        Emotion::Confused,
        &[
            "confused",
            "lost",
            "unsure",
            "don't know",
            "help me",
            "what should",
            "advice",
        ],
    ),
];

/// Case-insensitive substring scan through the keyword table, first matching
/// row wins. Total over any input; unmatched text is `Neutral`.
pub fn detect(text: &str) -> Emotion {
    let lower = text.to_lowercase();
    for (emotion, keywords) in KEYWORD_TABLE {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *emotion;
        }
    }
    Emotion::Neutral
}
