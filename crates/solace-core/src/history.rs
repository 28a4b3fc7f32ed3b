//! Per-day emotion history

use crate::types::EmotionCategory;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Emotion categories observed per calendar day, in arrival order.
///
/// Keys only exist for days with at least one recorded category.
#[derive(Debug, Clone, Default)]
pub struct EmotionLog {
    days: BTreeMap<NaiveDate, Vec<EmotionCategory>>,
}

impl EmotionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, date: NaiveDate, category: EmotionCategory) {
        self.days.entry(date).or_default().push(category);
    }

    /// Owned copy of the full mapping
    pub fn snapshot(&self) -> BTreeMap<NaiveDate, Vec<EmotionCategory>> {
        self.days.clone()
    }

    pub fn day(&self, date: NaiveDate) -> &[EmotionCategory] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of recorded classifications across all days
    pub fn total(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}
