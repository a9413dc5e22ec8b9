// src/chat/mod.rs
// Conversation turn processing: history repair, emotion and language
// classification, memory extraction, and the pipeline tying them together.

pub mod emotion;
pub mod error;
pub mod history;
pub mod language;
pub mod memory;
pub mod turn;
pub mod types;

pub use error::ChatError;
pub use history::{normalize, NormalizedHistory};
pub use turn::process_turn;
pub use types::{ChatMessage, Role};
