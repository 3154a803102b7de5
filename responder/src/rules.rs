//! Ordered reply rules. Rules are data: each entry pairs a name with a matcher
//! function; [`first_match`] walks the table top to bottom and the first rule
//! to return an outcome wins. Patterns compile once at first use.

use astrid_core::ConversationContext;
use lazy_static::lazy_static;
use regex::Regex;

use crate::replies;

/// Topic marker written to the context instead of the raw message when the
/// mood rule reads a low mood.
pub const NEGATIVE_EMOTION_TOPIC: &str = "negative_emotion";

/// Character length above which a message counts as a disclosure.
const DISCLOSURE_LEN: usize = 30;

lazy_static! {
    static ref GREETING_RE: Regex =
        Regex::new(r"^(hi|hello|hey)\b|^good (morning|afternoon|evening)\b").unwrap();
    static ref POSITIVE_MOOD_RE: Regex =
        Regex::new(r"\b(good|great|fine|well|happy|okay|ok|awesome|wonderful)\b").unwrap();
    static ref NEGATED_POSITIVE_RE: Regex =
        Regex::new(r"not (so |too |very )?(good|great|fine|well|happy|okay|ok)").unwrap();
    // Short "how are you" answers only; longer disclosures belong to the
    // disclosure rule below.
    static ref NEGATIVE_MOOD_RE: Regex = Regex::new(
        r"\b(bad|sad|tired|down|awful|terrible|rough|low)\b|not (so |too |very )?(good|great|fine|well|happy|okay|ok)"
    )
    .unwrap();
    static ref ADVICE_RE: Regex =
        Regex::new(r"\b(advice|help)\b|don'?t know|what should i do").unwrap();
}

/// How a matched rule produces its reply text.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// Returned verbatim.
    Fixed(&'static str),
    /// One entry drawn uniformly at random.
    OneOf(&'static [&'static str]),
}

/// What a matched rule asks the engine to do besides replying.
#[derive(Debug, Clone, Copy)]
pub struct RuleOutcome {
    pub reply: Reply,
    /// Marks the session as introduced (greeting rule only).
    pub set_introduced: bool,
    /// Replaces the usual lower-cased-message topic assignment.
    pub topic_override: Option<&'static str>,
}

/// Per-call view of the message handed to each matcher.
pub struct RuleInput<'a> {
    /// Trimmed, lower-cased message text.
    pub lower: &'a str,
    /// Character count of the trimmed original.
    pub char_len: usize,
    pub ctx: &'a ConversationContext,
}

/// One entry in the decision list.
pub struct Rule {
    pub name: &'static str,
    matcher: fn(&RuleInput<'_>) -> Option<RuleOutcome>,
}

/// The decision list, evaluated top to bottom. The last entry always matches.
pub static RULES: &[Rule] = &[
    Rule {
        name: "greeting",
        matcher: match_greeting,
    },
    Rule {
        name: "first_mood",
        matcher: match_first_mood,
    },
    Rule {
        name: "disclosure",
        matcher: match_disclosure,
    },
    Rule {
        name: "advice",
        matcher: match_advice,
    },
    Rule {
        name: "fallback",
        matcher: match_fallback,
    },
];

/// Returns the first matching rule's name and outcome.
pub fn first_match(input: &RuleInput<'_>) -> (&'static str, RuleOutcome) {
    for rule in RULES {
        if let Some(outcome) = (rule.matcher)(input) {
            return (rule.name, outcome);
        }
    }
    // The fallback entry matches everything; this arm never runs.
    (
        "fallback",
        RuleOutcome {
            reply: Reply::OneOf(replies::FALLBACK_REPLIES),
            set_introduced: false,
            topic_override: None,
        },
    )
}

fn match_greeting(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    if input.ctx.introduced || !GREETING_RE.is_match(input.lower) {
        return None;
    }
    Some(RuleOutcome {
        reply: Reply::Fixed(replies::INTRO_REPLY),
        set_introduced: true,
        topic_override: None,
    })
}

fn match_first_mood(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    if input.ctx.message_count != 1 || !input.ctx.introduced {
        return None;
    }
    if POSITIVE_MOOD_RE.is_match(input.lower) && !NEGATED_POSITIVE_RE.is_match(input.lower) {
        return Some(RuleOutcome {
            reply: Reply::Fixed(replies::POSITIVE_MOOD_REPLY),
            set_introduced: false,
            topic_override: None,
        });
    }
    if NEGATIVE_MOOD_RE.is_match(input.lower) {
        return Some(RuleOutcome {
            reply: Reply::Fixed(replies::NEGATIVE_MOOD_REPLY),
            set_introduced: false,
            topic_override: Some(NEGATIVE_EMOTION_TOPIC),
        });
    }
    // Neither mood read: let the later rules have it.
    None
}

fn match_disclosure(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    if input.char_len > DISCLOSURE_LEN
        || input.lower.contains("because")
        || input.lower.contains("feel")
    {
        return Some(RuleOutcome {
            reply: Reply::OneOf(replies::DEEP_LISTENING_REPLIES),
            set_introduced: false,
            topic_override: None,
        });
    }
    None
}

fn match_advice(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    if !ADVICE_RE.is_match(input.lower) {
        return None;
    }
    Some(RuleOutcome {
        reply: Reply::Fixed(replies::ADVICE_REPLY),
        set_introduced: false,
        topic_override: None,
    })
}

fn match_fallback(_input: &RuleInput<'_>) -> Option<RuleOutcome> {
    Some(RuleOutcome {
        reply: Reply::OneOf(replies::FALLBACK_REPLIES),
        set_introduced: false,
        topic_override: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(lower: &'a str, ctx: &'a ConversationContext) -> RuleInput<'a> {
        RuleInput {
            lower,
            char_len: lower.chars().count(),
            ctx,
        }
    }

    #[test]
    fn greeting_matches_word_starts_only() {
        let ctx = ConversationContext::new();
        assert_eq!(first_match(&input("hello", &ctx)).0, "greeting");
        assert_eq!(first_match(&input("hey there", &ctx)).0, "greeting");
        assert_eq!(first_match(&input("good morning", &ctx)).0, "greeting");
        // "highway" starts with "hi" but is not a greeting word.
        assert_ne!(first_match(&input("highway traffic", &ctx)).0, "greeting");
    }

    #[test]
    fn greeting_skipped_once_introduced() {
        let mut ctx = ConversationContext::new();
        ctx.introduced = true;
        ctx.message_count = 3;
        assert_ne!(first_match(&input("hello", &ctx)).0, "greeting");
    }

    #[test]
    fn negated_positive_reads_as_low_mood() {
        let mut ctx = ConversationContext::new();
        ctx.introduced = true;
        ctx.message_count = 1;
        let (name, outcome) = first_match(&input("not great", &ctx));
        assert_eq!(name, "first_mood");
        assert_eq!(outcome.topic_override, Some(NEGATIVE_EMOTION_TOPIC));
    }

    #[test]
    fn first_mood_falls_through_when_no_mood_word() {
        let mut ctx = ConversationContext::new();
        ctx.introduced = true;
        ctx.message_count = 1;
        assert_eq!(first_match(&input("the weather", &ctx)).0, "fallback");
    }

    #[test]
    fn disclosure_fires_on_length_or_keywords() {
        let ctx = ConversationContext::new();
        let mut introduced = ConversationContext::new();
        introduced.introduced = true;
        introduced.message_count = 5;
        assert_eq!(first_match(&input("i feel off", &introduced)).0, "disclosure");
        assert_eq!(
            first_match(&input("because of work stuff", &introduced)).0,
            "disclosure"
        );
        let long = "a".repeat(31);
        assert_eq!(first_match(&input(&long, &ctx)).0, "disclosure");
        let short = "a".repeat(30);
        assert_ne!(first_match(&input(&short, &ctx)).0, "disclosure");
    }

    #[test]
    fn advice_requests_get_the_fixed_question() {
        let mut ctx = ConversationContext::new();
        ctx.introduced = true;
        ctx.message_count = 4;
        assert_eq!(first_match(&input("i need help", &ctx)).0, "advice");
        assert_eq!(first_match(&input("what should i do", &ctx)).0, "advice");
        assert_eq!(first_match(&input("i don't know", &ctx)).0, "advice");
    }

    #[test]
    fn everything_else_lands_on_fallback() {
        let mut ctx = ConversationContext::new();
        ctx.introduced = true;
        ctx.message_count = 4;
        let (name, outcome) = first_match(&input("the weather", &ctx));
        assert_eq!(name, "fallback");
        assert!(matches!(outcome.reply, Reply::OneOf(_)));
    }
}
