//! Core types: transcript message, sender, and per-session conversation context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Assistant,
}

/// A single transcript entry. The transcript is append-only for the life of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    /// Self-help tips attached to an assistant reply; empty for user entries
    /// and for replies where no tip category matched.
    pub tips: Vec<String>,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Creates a user entry (never carries tips).
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            tips: Vec::new(),
            sent_at: Utc::now(),
        }
    }

    /// Creates an assistant entry with the given tips (may be empty).
    pub fn assistant(text: impl Into<String>, tips: Vec<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Assistant,
            tips,
            sent_at: Utc::now(),
        }
    }
}

/// Small mutable state threaded through successive responder calls.
///
/// Created fresh when a chat session opens, mutated only by the responder,
/// discarded when the session closes. Never shared across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Whether the opening greeting reply has already been sent.
    pub introduced: bool,
    /// Lower-cased text of the most recent user message, or a topic marker
    /// such as `negative_emotion` set by the mood rule.
    pub last_topic: String,
    /// Number of user messages classified so far; incremented once per call.
    pub message_count: u32,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_context_starts_empty() {
        let ctx = ConversationContext::new();
        assert!(!ctx.introduced);
        assert_eq!(ctx.last_topic, "");
        assert_eq!(ctx.message_count, 0);
    }

    #[test]
    fn user_entries_never_carry_tips() {
        let msg = ChatMessage::user("hello");
        assert_eq!(msg.sender, Sender::User);
        assert!(msg.tips.is_empty());
    }
}
