//! Canned reply texts. Fixed strings are returned verbatim; pools are drawn
//! from uniformly at random, one entry per reply.

/// Opening line shown when a chat session starts, before any user input.
pub const OPENER: &str = "Hi! I'm here to listen and chat. How are you feeling today?";

/// Fixed reply to the first greeting of a session.
pub const INTRO_REPLY: &str =
    "It's nice to meet you! I'm here to listen. How has your day been going?";

/// Affirming follow-up when the message right after the greeting reads as a good mood.
pub const POSITIVE_MOOD_REPLY: &str = "I'm glad to hear that! What's been going well for you?";

/// Empathetic follow-up when the message right after the greeting reads as a low mood.
pub const NEGATIVE_MOOD_REPLY: &str =
    "I'm sorry you're going through that. Would you like to talk about what's been weighing on you?";

/// Pool for long or self-disclosing messages.
pub const DEEP_LISTENING_REPLIES: &[&str] = &[
    "Thank you for sharing that with me. It sounds like a lot to carry. What part weighs on you the most?",
    "I hear you. That sounds really difficult. How long have you been feeling this way?",
    "That makes sense given everything you're dealing with. What usually helps, even a little?",
    "I'm here with you. Would you like to tell me more about what's been happening?",
];

/// Fixed clarifying question for advice-seeking messages.
pub const ADVICE_REPLY: &str = "What do you think would help the most right now?";

/// Pool for anything no earlier rule claimed.
pub const FALLBACK_REPLIES: &[&str] = &[
    "Tell me more about that.",
    "How does that make you feel?",
    "What's been on your mind lately?",
    "I'm listening. What else is going on?",
    "That sounds important. Can you say more about it?",
];
