//! Keyword-based emotion classification

use crate::types::EmotionCategory;

struct EmotionKeywords {
    category: EmotionCategory,
    keywords: &'static [&'static str],
}

/// Rules are checked in order and the first hit wins, so a reply that is
/// both happy and sad counts as happy.
const EMOTION_RULES: &[EmotionKeywords] = &[
    EmotionKeywords {
        category: EmotionCategory::Happy,
        keywords: &[
            "great",
            "good",
            "happy",
            "joy",
            "excited",
            "relieved",
            "grateful",
            "proud",
            "glad",
            "wonderful",
        ],
    },
    EmotionKeywords {
        category: EmotionCategory::Sad,
        keywords: &[
            "sad",
            "down",
            "unhappy",
            "depressed",
            "hopeless",
            "lonely",
            "empty",
            "tear",
        ],
    },
    EmotionKeywords {
        category: EmotionCategory::Anxious,
        keywords: &[
            "nervous",
            "worried",
            "anxious",
            "stressed",
            "panic",
            "overwhelmed",
            "tense",
        ],
    },
];

/// Classify a block of text into one emotion category.
///
/// Keywords match as plain substrings of the lower-cased text; anything
/// without a match is `Neutral`.
pub fn classify(text: &str) -> EmotionCategory {
    let lowered = text.to_lowercase();

    EMOTION_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|rule| rule.category)
        .unwrap_or(EmotionCategory::Neutral)
}
