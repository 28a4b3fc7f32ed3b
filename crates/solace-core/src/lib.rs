//! Emotion tracking and safety gating for the companion chat pipeline

mod boundary;
mod classifier;
mod companion;
mod config;
mod crisis;
pub mod error;
mod history;
mod paths;
mod prompt;
mod trend;
mod types;

pub use boundary::{ChartRenderer, Clock, FixedClock, LanguageModel, SystemClock};
pub use classifier::classify;
pub use companion::{
    ChartView, Companion, TurnOutcome, EMPTY_INPUT_MESSAGE, FALLBACK_MESSAGE, NO_DATA_STATUS,
};
pub use config::Config;
pub use crisis::{is_crisis, CRISIS_MESSAGE};
pub use error::{ChartError, ConfigError, ModelError};
pub use history::EmotionLog;
pub use paths::Paths;
pub use prompt::{build_prompt, RESPONSE_SHAPE, STYLE_PREAMBLE};
pub use trend::aggregate;
pub use types::{EmotionCategory, Transcript, TrendPoint, Turn};
