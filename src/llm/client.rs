// src/llm/client.rs
// Thin client for the hosted completion endpoint. One blocking outbound call
// per turn; no retry or backoff here, callers own that policy.

use std::time::Duration;

use reqwest::{Client as ReqwestClient, StatusCode};
use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::chat::{ChatError, NormalizedHistory};
use crate::config::CONFIG;

/// Substituted when the provider succeeds but returns no extractable text.
/// An empty reply never reaches the caller.
pub const APOLOGY_REPLY: &str = "I apologize, I could not generate a response.";

pub struct CompletionClient {
    http: ReqwestClient,
    api_base: String,
    api_key: Option<String>,
    model: String,
}

impl CompletionClient {
    /// Builds the client from the global configuration. A missing credential
    /// is tolerated at startup and rejected per request, so the server can
    /// boot and report the problem instead of crash-looping.
    pub fn from_config() -> anyhow::Result<Self> {
        let http = ReqwestClient::builder()
            .timeout(Duration::from_secs(CONFIG.upstream_timeout))
            .pool_max_idle_per_host(10)
            .build()?;

        info!(
            "Initializing completion client: base={}, model={}",
            CONFIG.api_base, CONFIG.model
        );
        if CONFIG.api_key.is_none() {
            warn!("PERPLEXITY_API_KEY is not set; chat requests will fail until configured");
        }

        Ok(Self {
            http,
            api_base: CONFIG.api_base.clone(),
            api_key: CONFIG.api_key.clone(),
            model: CONFIG.model.clone(),
        })
    }

    pub fn new(
        api_base: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    ) -> Self {
        let http = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            http,
            api_base,
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends the system instruction plus the normalized history and extracts
    /// the first choice's text. 429 maps to `RateLimited`; any other non-2xx
    /// status, transport failure, or unparseable body maps to
    /// `InferenceFailed` with the detail kept for server-side logs.
    pub async fn complete(
        &self,
        system_prompt: &str,
        history: &NormalizedHistory,
    ) -> Result<String, ChatError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(ChatError::Misconfigured);
        };

        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(json!({ "role": "system", "content": system_prompt }));
        for msg in history.messages() {
            messages.push(json!({ "role": msg.role, "content": msg.content }));
        }

        let body = json!({
            "model": self.model,
            "messages": messages,
        });

        debug!("Sending completion request: {} messages", history.len());
        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::InferenceFailed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Completion provider rate limit hit");
            return Err(ChatError::RateLimited);
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!("Completion API error: {} {}", status, detail);
            return Err(ChatError::InferenceFailed(format!("{status}: {detail}")));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ChatError::InferenceFailed(format!("malformed response body: {e}")))?;

        let text = payload
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty());

        match text {
            Some(text) => Ok(text.to_string()),
            None => {
                warn!("Completion response carried no text, substituting apology");
                Ok(APOLOGY_REPLY.to_string())
            }
        }
    }
}
