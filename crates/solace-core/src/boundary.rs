//! Traits for the collaborators the companion talks to

use crate::error::{ChartError, ModelError};
use crate::types::TrendPoint;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Text generation service
pub trait LanguageModel: Send + Sync {
    /// Model identifier, for logs
    fn name(&self) -> &str {
        "model"
    }

    /// Generate a reply for a full prompt.
    ///
    /// An empty string is a valid result; callers decide how to present it.
    fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Turns a trend series into an image on disk
pub trait ChartRenderer: Send + Sync {
    /// Render the series and return where the image was written.
    ///
    /// Never called with an empty series.
    fn render(&self, points: &[TrendPoint]) -> Result<PathBuf, ChartError>;
}

/// Source of the calendar day used to key emotion history
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always reports the same day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
