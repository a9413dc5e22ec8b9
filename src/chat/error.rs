// src/chat/error.rs

use thiserror::Error;

/// Everything that can go wrong while processing a turn. Classification and
/// memory extraction are total and never fail; only normalization and the
/// outbound completion call produce errors.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Normalization left no user message to answer.
    #[error("no user message to answer after history normalization")]
    InvalidHistory,

    /// The completion API credential is absent; fatal for the request,
    /// checked before any network I/O.
    #[error("completion API key is not configured")]
    Misconfigured,

    /// Upstream 429. Not retried here; callers decide when to try again.
    #[error("completion provider rate limit exceeded")]
    RateLimited,

    /// Any other upstream failure: non-2xx status, transport error, or a
    /// response body that would not parse. The detail is for server-side
    /// logs, never shown verbatim to end users.
    #[error("completion request failed: {0}")]
    InferenceFailed(String),
}
