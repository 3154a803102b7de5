//! The response engine: walks the rule table, draws randomized replies from
//! its own RNG, runs the tip and crisis side computations, and updates the
//! conversation context. Pure over (message, context) apart from the RNG,
//! which is injected so tests can seed it.

use astrid_core::ConversationContext;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::crisis;
use crate::rules::{self, Reply, RuleInput};
use crate::tips;

/// Character length above which tip lookup runs.
const TIP_LOOKUP_LEN: usize = 20;

/// One classified reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Primary reply text.
    pub text: String,
    /// Up to three self-help tips; empty when no category matched or the
    /// message was too short for lookup.
    pub tips: Vec<String>,
    /// The fixed emergency resource text, to be shown as a second assistant
    /// message after the primary reply.
    pub crisis: Option<String>,
}

impl Response {
    pub fn is_crisis(&self) -> bool {
        self.crisis.is_some()
    }
}

/// Rule-based reply selector.
///
/// Holds only an RNG; all conversation state lives in the
/// [`ConversationContext`] threaded through [`respond`](Self::respond).
/// One responder per chat session.
pub struct Responder {
    rng: StdRng,
}

impl Responder {
    /// Responder seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Responder with a fixed seed. Reply and tip draws happen in a fixed
    /// order, so a seeded responder is fully reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Classifies one user message and updates the context.
    ///
    /// Returns `None` for empty or whitespace-only input, leaving the context
    /// untouched. Callers are expected to reject empty input themselves; this
    /// is a second guard, not the contract.
    ///
    /// Otherwise: the first matching rule picks the reply, then two side
    /// computations run regardless of the rule. Messages longer than 20
    /// characters get a tip lookup. Crisis keywords attach the emergency
    /// resource text. Finally `message_count` increments by one and
    /// `last_topic` becomes the lower-cased message, unless the matched rule
    /// overrides the topic.
    pub fn respond(&mut self, message: &str, ctx: &mut ConversationContext) -> Option<Response> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return None;
        }
        let lower = trimmed.to_lowercase();
        let char_len = trimmed.chars().count();

        let input = RuleInput {
            lower: &lower,
            char_len,
            ctx,
        };
        let (rule_name, outcome) = rules::first_match(&input);
        debug!(rule = rule_name, char_len, "reply rule matched");

        // Reply draw happens before the tip draw; seeded runs depend on it.
        let text = match outcome.reply {
            Reply::Fixed(reply) => reply.to_string(),
            Reply::OneOf(pool) => pool
                .choose(&mut self.rng)
                .copied()
                .unwrap_or_default()
                .to_string(),
        };

        let tip_list = if char_len > TIP_LOOKUP_LEN {
            let matched = tips::matched_categories(trimmed);
            tips::sample_tips(&matched, &mut self.rng)
        } else {
            Vec::new()
        };

        let crisis = if crisis::is_crisis(trimmed) {
            Some(crisis::emergency_message())
        } else {
            None
        };

        ctx.message_count += 1;
        ctx.last_topic = match outcome.topic_override {
            Some(topic) => topic.to_string(),
            None => lower,
        };
        if outcome.set_introduced {
            ctx.introduced = true;
        }

        Some(Response {
            text,
            tips: tip_list,
            crisis,
        })
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

// Behavioral tests live in tests/responder_test.rs
