//! Chat session: owns the transcript, the conversation context, and a
//! responder. Created fresh when a chat opens, discarded when it closes;
//! nothing persists across sessions.

use astrid_core::{ChatMessage, ConversationContext, Sender};
use responder::{replies, Responder};
use tracing::{debug, instrument};

/// One chat session for one user.
pub struct ChatSession {
    pub user_id: String,
    transcript: Vec<ChatMessage>,
    context: ConversationContext,
    responder: Responder,
}

impl ChatSession {
    /// Opens a session seeded with the assistant's opening line.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::with_responder(user_id, Responder::new())
    }

    /// Opens a session with a seeded responder, for reproducible runs.
    pub fn with_seed(user_id: impl Into<String>, seed: u64) -> Self {
        Self::with_responder(user_id, Responder::with_seed(seed))
    }

    fn with_responder(user_id: impl Into<String>, responder: Responder) -> Self {
        Self {
            user_id: user_id.into(),
            transcript: vec![ChatMessage::assistant(replies::OPENER, Vec::new())],
            context: ConversationContext::new(),
            responder,
        }
    }

    /// Submits one line of user input.
    ///
    /// Whitespace-only input is a no-op returning no messages. Otherwise the
    /// user entry is appended, the responder runs, and the primary reply
    /// (with its tips) is appended, followed by the crisis resource message
    /// as a second assistant entry when one fired. Returns clones of the
    /// newly appended assistant entries, in transcript order.
    #[instrument(skip(self, text), fields(user_id = %self.user_id))]
    pub fn submit(&mut self, text: &str) -> Vec<ChatMessage> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("Ignoring empty input");
            return Vec::new();
        }

        self.transcript.push(ChatMessage::user(trimmed));

        // Guarded above, so the responder always yields here.
        let Some(response) = self.responder.respond(trimmed, &mut self.context) else {
            return Vec::new();
        };
        debug!(
            message_count = self.context.message_count,
            crisis = response.is_crisis(),
            tips = response.tips.len(),
            "Reply selected"
        );

        let mut appended = vec![ChatMessage::assistant(response.text, response.tips)];
        if let Some(crisis_text) = response.crisis {
            appended.push(ChatMessage::assistant(crisis_text, Vec::new()));
        }
        for entry in &appended {
            self.transcript.push(entry.clone());
        }
        appended
    }

    /// The append-only transcript, opener included.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    /// Number of user entries in the transcript.
    pub fn user_message_count(&self) -> usize {
        self.transcript
            .iter()
            .filter(|m| m.sender == Sender::User)
            .count()
    }
}
