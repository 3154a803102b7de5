//! Crisis keyword detection and the fixed emergency resource text.
//!
//! Detection is independent of reply selection: when it fires, the resource
//! text is emitted as an additional assistant message, never replacing the
//! primary reply, and always verbatim.

use lazy_static::lazy_static;
use regex::Regex;

/// Emergency resource lines, joined by newlines when emitted. Never sampled,
/// never reworded.
pub const EMERGENCY_RESOURCES: &[&str] = &[
    "If you're having thoughts of suicide or experiencing a mental health crisis, please:",
    "- Call 988 for the Suicide and Crisis Lifeline (US)",
    "- Call 911 or go to the nearest emergency room if you're in immediate danger",
    "- Text HOME to 741741 to connect with a Crisis Counselor",
    "Remember: You're not alone, and help is available 24/7.",
];

lazy_static! {
    // Plain substring alternatives, deliberately broad: a false positive
    // shows a help line, a false negative hides one.
    static ref CRISIS_RE: Regex =
        Regex::new(r"(?i)suicide|kill|die|end it|harm|hurt myself").unwrap();
}

/// Whether the message contains a crisis keyword.
pub fn is_crisis(message: &str) -> bool {
    CRISIS_RE.is_match(message)
}

/// The resource list as a single multi-line message.
pub fn emergency_message() -> String {
    EMERGENCY_RESOURCES.join("\n")
}
