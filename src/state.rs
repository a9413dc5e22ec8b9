// src/state.rs

use std::sync::Arc;

use crate::llm::CompletionClient;

/// Shared application state. Turn processing itself is stateless; the only
/// thing handlers share is the completion client and its connection pool.
#[derive(Clone)]
pub struct AppState {
    pub llm_client: Arc<CompletionClient>,
}

impl AppState {
    pub fn new(llm_client: Arc<CompletionClient>) -> Self {
        Self { llm_client }
    }
}
