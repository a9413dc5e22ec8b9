// src/chat/history.rs
// Repairs client-supplied message histories into the strict alternating,
// user-terminated shape the completion provider requires.

use super::types::{ChatMessage, Role};

/// A repaired message history. Invariants: roles alternate strictly, and a
/// non-empty history ends on a `User` message. An empty history means the
/// input carried no answerable user content and must be rejected upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedHistory(Vec<ChatMessage>);

impl NormalizedHistory {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The trailing user message, i.e. the utterance the assistant must
    /// answer. `None` when the history is empty or (degenerate input) could
    /// not be repaired to end on a user turn.
    pub fn last_user(&self) -> Option<&ChatMessage> {
        self.0.last().filter(|m| m.role == Role::User)
    }
}

/// Single greedy pass over the raw history. A user message is kept only when
/// the previous kept message was not already a user turn; an assistant
/// message is kept only when it directly answers a kept user turn — an
/// assistant reply to a dropped user message is dropped with it. Afterwards
/// the last user message of the original input is re-appended if the result
/// does not already end on one, unless that would duplicate the trailing
/// content.
pub fn normalize(input: &[ChatMessage]) -> NormalizedHistory {
    let mut cleaned: Vec<ChatMessage> = Vec::with_capacity(input.len());
    let mut last_role: Option<Role> = None;
    let mut prev_kept = false;

    for msg in input {
        match msg.role {
            Role::User if last_role != Some(Role::User) => {
                cleaned.push(msg.clone());
                last_role = Some(Role::User);
                prev_kept = true;
            }
            Role::Assistant if last_role == Some(Role::User) && prev_kept => {
                cleaned.push(msg.clone());
                last_role = Some(Role::Assistant);
                prev_kept = true;
            }
            _ => prev_kept = false,
        }
    }

    if cleaned.last().map(|m| m.role) != Some(Role::User) {
        if let Some(last_user) = input.iter().rev().find(|m| m.role == Role::User) {
            let duplicate = cleaned
                .last()
                .is_some_and(|m| m.content == last_user.content);
            if !duplicate {
                cleaned.push(last_user.clone());
            }
        }
    }

    NormalizedHistory(cleaned)
}
