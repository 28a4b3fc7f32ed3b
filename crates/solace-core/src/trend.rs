//! Daily trend aggregation

use crate::types::{EmotionCategory, TrendPoint};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Reduce each day's categories to their mean ordinal, oldest day first.
///
/// Days with no entries are skipped; an empty log yields an empty series.
pub fn aggregate(days: &BTreeMap<NaiveDate, Vec<EmotionCategory>>) -> Vec<TrendPoint> {
    days.iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(&date, values)| {
            let sum: f64 = values.iter().map(|c| f64::from(c.ordinal())).sum();
            TrendPoint {
                date,
                average: sum / values.len() as f64,
            }
        })
        .collect()
}
