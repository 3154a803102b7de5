//! Self-help tip catalog and the two-step tip lookup: a pure matching step
//! (message to matched categories) and a separate sampling step (pool,
//! shuffle, take up to three). Keeping them apart lets the matcher be tested
//! without randomness.

use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

/// Upper bound on tips attached to a single reply.
pub const MAX_TIPS: usize = 3;

pub const ANXIETY_TIPS: &[&str] = &[
    "Practice deep breathing exercises: Inhale for 4 counts, hold for 4, exhale for 4",
    "Challenge negative thoughts with evidence-based thinking",
    "Use grounding techniques like the 5-4-3-2-1 method (name 5 things you see, 4 you feel, etc.)",
    "Maintain a regular sleep schedule",
    "Limit caffeine and alcohol intake",
    "Consider talking to a mental health professional for Cognitive Behavioral Therapy (CBT)",
];

pub const DEPRESSION_TIPS: &[&str] = &[
    "Set small, achievable daily goals",
    "Try to maintain a regular daily routine",
    "Exercise, even if it's just a short walk",
    "Reach out to friends or family members",
    "Practice self-care activities you usually enjoy",
    "Consider speaking with a mental health professional about therapy or medication options",
];

pub const STRESS_TIPS: &[&str] = &[
    "Break large tasks into smaller, manageable steps",
    "Practice mindfulness or meditation",
    "Exercise regularly to release endorphins",
    "Maintain a healthy work-life balance",
    "Set boundaries with work and relationships",
    "Use time management techniques like the Pomodoro method",
];

pub const SLEEP_TIPS: &[&str] = &[
    "Maintain a consistent sleep schedule",
    "Create a relaxing bedtime routine",
    "Avoid screens for an hour before bed",
    "Keep your bedroom cool, dark, and quiet",
    "Limit caffeine after noon",
    "Consider speaking with a healthcare provider if sleep problems persist",
];

pub const RELATIONSHIP_TIPS: &[&str] = &[
    "Practice active listening",
    "Express feelings using 'I' statements",
    "Set and maintain healthy boundaries",
    "Take time for self-reflection",
    "Consider couples counseling for ongoing issues",
    "Focus on open and honest communication",
];

pub const SELF_ESTEEM_TIPS: &[&str] = &[
    "Practice positive self-talk",
    "Set realistic goals and celebrate achievements",
    "Focus on your strengths and accomplishments",
    "Challenge negative self-perceptions",
    "Surround yourself with supportive people",
    "Consider working with a therapist on self-worth issues",
];

/// Shown by the standalone tips command when no category keyword matches.
/// Never attached to chat replies.
pub const GENERAL_TIPS: &[&str] = &[
    "Practice self-care activities that you enjoy",
    "Maintain a balanced daily routine",
    "Stay connected with supportive people",
    "Consider talking to a mental health professional",
    "Remember that seeking help is a sign of strength",
];

/// A named tip category with its keyword pattern and fixed tip list.
pub struct TipCategory {
    /// Stable identifier, usable as a command-line topic argument.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    pattern: Regex,
    pub tips: &'static [&'static str],
}

impl TipCategory {
    pub fn matches(&self, message: &str) -> bool {
        self.pattern.is_match(message)
    }
}

lazy_static! {
    /// The six shipped categories. Loaded once; order is stable.
    pub static ref TIP_CATEGORIES: Vec<TipCategory> = vec![
        TipCategory {
            id: "anxiety",
            name: "Anxiety",
            pattern: Regex::new(r"(?i)anxious|anxiety|worry|panic|stress|overwhelm").unwrap(),
            tips: ANXIETY_TIPS,
        },
        TipCategory {
            id: "depression",
            name: "Depression",
            pattern: Regex::new(r"(?i)depress|sad|hopeless|unmotivated|tired|exhausted").unwrap(),
            tips: DEPRESSION_TIPS,
        },
        TipCategory {
            id: "stress",
            name: "Stress Management",
            pattern: Regex::new(r"(?i)stress|busy|workload|pressure|deadline|overwhelm").unwrap(),
            tips: STRESS_TIPS,
        },
        TipCategory {
            id: "sleep",
            name: "Sleep Issues",
            pattern: Regex::new(r"(?i)sleep|insomnia|tired|rest|fatigue|exhausted").unwrap(),
            tips: SLEEP_TIPS,
        },
        TipCategory {
            id: "relationships",
            name: "Relationship Concerns",
            pattern: Regex::new(r"(?i)relationship|partner|friend|family|conflict|argument").unwrap(),
            tips: RELATIONSHIP_TIPS,
        },
        TipCategory {
            id: "self-esteem",
            name: "Self-Esteem",
            pattern: Regex::new(r"(?i)confidence|self-esteem|worth|value|hate myself|not good enough")
                .unwrap(),
            tips: SELF_ESTEEM_TIPS,
        },
    ];
}

/// Pure matching step: every category whose pattern matches the message,
/// in catalog order. A message may match zero, one, or several categories.
pub fn matched_categories(message: &str) -> Vec<&'static TipCategory> {
    TIP_CATEGORIES
        .iter()
        .filter(|category| category.matches(message))
        .collect()
}

/// Sampling step: pool all tips from the given categories, shuffle uniformly,
/// keep at most [`MAX_TIPS`]. Empty input gives an empty result.
pub fn sample_tips<R: Rng>(categories: &[&TipCategory], rng: &mut R) -> Vec<String> {
    let mut pool: Vec<&str> = categories
        .iter()
        .flat_map(|category| category.tips.iter().copied())
        .collect();
    pool.shuffle(rng);
    pool.truncate(MAX_TIPS);
    pool.into_iter().map(str::to_string).collect()
}

/// Looks a category up by its identifier.
pub fn category_by_id(id: &str) -> Option<&'static TipCategory> {
    TIP_CATEGORIES.iter().find(|category| category.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn matching_is_case_insensitive() {
        let matched = matched_categories("Feeling ANXIOUS today");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "anxiety");
    }

    #[test]
    fn one_message_can_match_several_categories() {
        // "stress" is an anxiety keyword and a stress keyword.
        let ids: Vec<&str> = matched_categories("so much stress and no sleep")
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["anxiety", "stress", "sleep"]);
    }

    #[test]
    fn unrelated_text_matches_nothing() {
        assert!(matched_categories("what a sunny afternoon").is_empty());
    }

    #[test]
    fn sampled_tips_come_from_matched_catalogs() {
        let mut rng = StdRng::seed_from_u64(7);
        let matched = matched_categories("anxious about everything");
        let tips = sample_tips(&matched, &mut rng);
        assert!(!tips.is_empty());
        assert!(tips.len() <= MAX_TIPS);
        for tip in &tips {
            assert!(ANXIETY_TIPS.contains(&tip.as_str()));
        }
    }

    #[test]
    fn sampling_an_empty_pool_gives_no_tips() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample_tips(&[], &mut rng).is_empty());
    }

    #[test]
    fn category_lookup_by_id() {
        assert_eq!(category_by_id("sleep").map(|c| c.name), Some("Sleep Issues"));
        assert!(category_by_id("gardening").is_none());
    }
}
