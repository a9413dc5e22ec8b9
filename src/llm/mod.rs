// src/llm/mod.rs

pub mod client;

pub use client::{CompletionClient, APOLOGY_REPLY};
