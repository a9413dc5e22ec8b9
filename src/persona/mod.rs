// src/persona/mod.rs
// Personality presets for Gabble's voice. A closed set selectable per
// request; unknown labels fall back to Helpful at the request boundary.

pub mod voices;

use voices::{CASUAL_VOICE, CONCISE_VOICE, CREATIVE_VOICE, HELPFUL_VOICE, PROFESSIONAL_VOICE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Personality {
    #[default]
    Helpful,
    Professional,
    Casual,
    Creative,
    Concise,
}

impl Personality {
    /// Returns the voice description opening the system prompt for this
    /// personality.
    pub fn prompt(&self) -> &'static str {
        match self {
            Personality::Helpful => HELPFUL_VOICE,
            Personality::Professional => PROFESSIONAL_VOICE,
            Personality::Casual => CASUAL_VOICE,
            Personality::Creative => CREATIVE_VOICE,
            Personality::Concise => CONCISE_VOICE,
        }
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Personality::Helpful => "helpful",
                Personality::Professional => "professional",
                Personality::Casual => "casual",
                Personality::Creative => "creative",
                Personality::Concise => "concise",
            }
        )
    }
}

impl std::str::FromStr for Personality {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "helpful" => Ok(Personality::Helpful),
            "professional" => Ok(Personality::Professional),
            "casual" => Ok(Personality::Casual),
            "creative" => Ok(Personality::Creative),
            "concise" => Ok(Personality::Concise),
            _ => Err(()),
        }
    }
}
