//! Core types for emotion tracking

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotional tone of an assistant reply, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    /// Ordinal 0
    Sad,
    /// Ordinal 1
    Anxious,
    /// Ordinal 2
    Neutral,
    /// Ordinal 3
    Happy,
}

impl EmotionCategory {
    /// All categories in ordinal order
    pub const ALL: [EmotionCategory; 4] = [
        EmotionCategory::Sad,
        EmotionCategory::Anxious,
        EmotionCategory::Neutral,
        EmotionCategory::Happy,
    ];

    pub fn ordinal(self) -> u8 {
        match self {
            EmotionCategory::Sad => 0,
            EmotionCategory::Anxious => 1,
            EmotionCategory::Neutral => 2,
            EmotionCategory::Happy => 3,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Closest category to a daily average (ties round up)
    pub fn nearest(average: f64) -> Self {
        let clamped = average.clamp(0.0, 3.0);
        Self::from_ordinal(clamped.round() as u8).unwrap_or(EmotionCategory::Neutral)
    }

    pub fn name(self) -> &'static str {
        match self {
            EmotionCategory::Sad => "Sad",
            EmotionCategory::Anxious => "Anxious",
            EmotionCategory::Neutral => "Neutral",
            EmotionCategory::Happy => "Happy",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            EmotionCategory::Sad => "😔",
            EmotionCategory::Anxious => "😟",
            EmotionCategory::Neutral => "😐",
            EmotionCategory::Happy => "😊",
        }
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.emoji())
    }
}

/// One exchange in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub assistant: String,
}

impl Turn {
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            assistant: assistant.into(),
        }
    }
}

/// Append-only chat log for the current process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

/// Average emotion for a single day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Mean ordinal in [0.0, 3.0]
    pub average: f64,
}
