// src/chat/language.rs
// Response-language selection: Unicode script ranges first, then small
// function-word lexicons for Roman-script languages. Detection beats the
// requested preference whenever it fires; false negatives fall back to the
// preference, false positives are an accepted limitation of the heuristic.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    EnUs,
    EnGb,
    HiIn,
    HiEn,
    EsEs,
    FrFr,
    DeDe,
    PtBr,
    TaIn,
    TeIn,
    BnIn,
    MrIn,
    GuIn,
    KnIn,
    MlIn,
    PaIn,
    UrIn,
}

impl Language {
    pub fn tag(&self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::EnGb => "en-GB",
            Language::HiIn => "hi-IN",
            Language::HiEn => "hi-EN",
            Language::EsEs => "es-ES",
            Language::FrFr => "fr-FR",
            Language::DeDe => "de-DE",
            Language::PtBr => "pt-BR",
            Language::TaIn => "ta-IN",
            Language::TeIn => "te-IN",
            Language::BnIn => "bn-IN",
            Language::MrIn => "mr-IN",
            Language::GuIn => "gu-IN",
            Language::KnIn => "kn-IN",
            Language::MlIn => "ml-IN",
            Language::PaIn => "pa-IN",
            Language::UrIn => "ur-IN",
        }
    }

    /// Directive telling the downstream model which language and script to
    /// answer in.
    pub fn instruction(&self) -> &'static str {
        match self {
            Language::EnUs => "Respond in American English.",
            Language::EnGb => "Respond in British English.",
            Language::HiIn => "हिंदी में जवाब दें। Use Devanagari script for Hindi responses.",
            Language::HiEn => {
                "Respond in Hinglish - a natural mix of Hindi and English as spoken in India. \
                 Use Roman script."
            }
            Language::EsEs => "Respond in Spanish.",
            Language::FrFr => "Respond in French.",
            Language::DeDe => "Respond in German.",
            Language::PtBr => "Respond in Brazilian Portuguese.",
            Language::TaIn => "Respond in Tamil.",
            Language::TeIn => "Respond in Telugu.",
            Language::BnIn => "Respond in Bengali.",
            Language::MrIn => "Respond in Marathi.",
            Language::GuIn => "Respond in Gujarati.",
            Language::KnIn => "Respond in Kannada.",
            Language::MlIn => "Respond in Malayalam.",
            Language::PaIn => "Respond in Punjabi.",
            Language::UrIn => "Respond in Urdu.",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-US" => Ok(Language::EnUs),
            "en-GB" => Ok(Language::EnGb),
            "hi-IN" => Ok(Language::HiIn),
            "hi-EN" => Ok(Language::HiEn),
            "es-ES" => Ok(Language::EsEs),
            "fr-FR" => Ok(Language::FrFr),
            "de-DE" => Ok(Language::DeDe),
            "pt-BR" => Ok(Language::PtBr),
            "ta-IN" => Ok(Language::TaIn),
            "te-IN" => Ok(Language::TeIn),
            "bn-IN" => Ok(Language::BnIn),
            "mr-IN" => Ok(Language::MrIn),
            "gu-IN" => Ok(Language::GuIn),
            "kn-IN" => Ok(Language::KnIn),
            "ml-IN" => Ok(Language::MlIn),
            "pa-IN" => Ok(Language::PaIn),
            "ur-IN" => Ok(Language::UrIn),
            _ => Err(()),
        }
    }
}

/// Unicode block ranges, one per script. A single character in range is a
/// strong enough signal. Marathi shares Devanagari with Hindi and therefore
/// detects as hi-IN; it remains selectable as an explicit preference.
const SCRIPT_RANGES: &[(char, char, Language)] = &[
    ('\u{0900}', '\u{097F}', Language::HiIn), // Devanagari
    ('\u{0B80}', '\u{0BFF}', Language::TaIn), // Tamil
    ('\u{0C00}', '\u{0C7F}', Language::TeIn), // Telugu
    ('\u{0980}', '\u{09FF}', Language::BnIn), // Bengali
    ('\u{0A80}', '\u{0AFF}', Language::GuIn), // Gujarati
    ('\u{0C80}', '\u{0CFF}', Language::KnIn), // Kannada
    ('\u{0D00}', '\u{0D7F}', Language::MlIn), // Malayalam
    ('\u{0A00}', '\u{0A7F}', Language::PaIn), // Gurmukhi
    ('\u{0600}', '\u{06FF}', Language::UrIn), // Arabic
];

// Common Hindi function words written in Roman script.
static HINGLISH_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(kya|kaise|kahan|kab|kaun|kyun|haan|nahi|acha|theek|mujhe|tumhe|aapka|mera|tera|humara|bahut|bohot|accha|bhai|yaar|bolo|batao|samajh|samjho|dekho|suno|jao|aao|karo|karna|raha|rahi|rahe|wala|wali|wale|hai|hain|tha|thi|the|hoga|hogi|honge|lekin|aur|ya|par|se|ko|ka|ki|ke|ne|ho|main|hum|tum|aap|wo|woh|ye|yeh|kuch|sab|ab|abhi)\b",
    )
    .expect("hinglish lexicon regex is valid")
});

static SPANISH_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(hola|gracias|por favor|como|estas|bueno|bien|malo|que|donde|cuando|porque|pero|muy|si|no|yo|tu|el|ella|nosotros|ellos|tengo|tienes|tiene|quiero|puedo|necesito)\b",
    )
    .expect("spanish lexicon regex is valid")
});

static FRENCH_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(bonjour|merci|s'il vous plait|comment|allez|bien|mal|oui|non|je|tu|il|elle|nous|vous|ils|elles|suis|es|est|sommes|etes|sont|avoir|etre|faire|aller|vouloir|pouvoir)\b",
    )
    .expect("french lexicon regex is valid")
});

static GERMAN_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(hallo|danke|bitte|wie|geht|gut|schlecht|ja|nein|ich|du|er|sie|wir|ihr|bin|bist|ist|sind|seid|haben|sein|machen|gehen|wollen|konnen)\b",
    )
    .expect("german lexicon regex is valid")
});

/// Best-effort language identification. Priority order: script ranges, then
/// the Hinglish lexicon, then Spanish, French, and German lexicons. Returns
/// `None` when no strong signal is found.
pub fn detect(text: &str) -> Option<Language> {
    for &(start, end, language) in SCRIPT_RANGES {
        if text.chars().any(|c| c >= start && c <= end) {
            return Some(language);
        }
    }

    let lexicons: [(&Regex, Language); 4] = [
        (&*HINGLISH_WORDS, Language::HiEn),
        (&*SPANISH_WORDS, Language::EsEs),
        (&*FRENCH_WORDS, Language::FrFr),
        (&*GERMAN_WORDS, Language::DeDe),
    ];
    for (lexicon, language) in lexicons {
        if lexicon.is_match(text) {
            return Some(language);
        }
    }

    None
}

/// Detection wins over the requested preference whenever it yields a signal.
pub fn resolve(text: &str, requested: Language) -> Language {
    detect(text).unwrap_or(requested)
}
