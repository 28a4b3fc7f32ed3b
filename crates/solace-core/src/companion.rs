//! Conversation orchestrator: crisis gate, model call, classification, history

use crate::boundary::{ChartRenderer, Clock, LanguageModel, SystemClock};
use crate::classifier::classify;
use crate::crisis::{is_crisis, CRISIS_MESSAGE};
use crate::error::ModelError;
use crate::history::EmotionLog;
use crate::prompt::build_prompt;
use crate::trend::aggregate;
use crate::types::{EmotionCategory, Transcript, TrendPoint, Turn};
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a message so I can help.";

pub const FALLBACK_MESSAGE: &str =
    "I'm here with you. I couldn't generate a full response. Could you try rephrasing that?";

pub const NO_DATA_STATUS: &str = "No emotion data yet. Chat a bit first, then try again.";

/// How a single `send_message` call was resolved
#[derive(Debug)]
pub enum TurnOutcome {
    /// Blank input; a prompt-for-input turn was appended
    EmptyInput,
    /// Crisis phrase found; the scripted safety reply was appended
    CrisisDetected,
    /// Model replied and the reply was recorded under this category
    Replied(EmotionCategory),
    /// Model returned no text; the fallback reply was appended
    Fallback,
    /// Model call failed; the error was appended as the reply
    ModelFailure(ModelError),
}

impl TurnOutcome {
    /// Whether this turn added an entry to emotion history
    pub fn recorded(&self) -> bool {
        matches!(self, TurnOutcome::Replied(_))
    }
}

/// What the chart surface should show
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartView {
    pub image: Option<PathBuf>,
    pub status: String,
}

impl ChartView {
    pub fn empty() -> Self {
        Self::default()
    }

    fn status(status: impl Into<String>) -> Self {
        Self {
            image: None,
            status: status.into(),
        }
    }
}

/// Owns the transcript and emotion history for one conversation
pub struct Companion {
    model: Box<dyn LanguageModel>,
    renderer: Box<dyn ChartRenderer>,
    clock: Box<dyn Clock>,
    transcript: Transcript,
    history: EmotionLog,
}

impl Companion {
    pub fn new(model: Box<dyn LanguageModel>, renderer: Box<dyn ChartRenderer>) -> Self {
        Self {
            model,
            renderer,
            clock: Box::new(SystemClock),
            transcript: Transcript::new(),
            history: EmotionLog::new(),
        }
    }

    /// Replace the source of "today" used to key history
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn history(&self) -> &EmotionLog {
        &self.history
    }

    /// Handle one user message.
    ///
    /// `input` is always left empty afterwards. The new turn is the last
    /// entry of [`Companion::transcript`].
    pub fn send_message(&mut self, input: &mut String) -> TurnOutcome {
        let raw = std::mem::take(input);
        let text = raw.trim();

        if text.is_empty() {
            debug!("empty input");
            self.transcript.push(Turn::new("", EMPTY_INPUT_MESSAGE));
            return TurnOutcome::EmptyInput;
        }

        if is_crisis(text) {
            info!("crisis phrase detected; skipping model call");
            self.transcript.push(Turn::new(text, CRISIS_MESSAGE));
            return TurnOutcome::CrisisDetected;
        }

        let prompt = build_prompt(text);
        debug!(
            model = self.model.name(),
            input_chars = text.len(),
            "invoking model"
        );

        match self.model.generate(&prompt) {
            Ok(reply) => {
                let reply = reply.trim();
                if reply.is_empty() {
                    warn!(model = self.model.name(), "model returned no text");
                    self.transcript.push(Turn::new(text, FALLBACK_MESSAGE));
                    return TurnOutcome::Fallback;
                }

                let category = classify(reply);
                let today = self.clock.today();
                self.history.record(today, category);
                debug!(%today, category = category.name(), "recorded emotion");

                self.transcript.push(Turn::new(text, reply));
                TurnOutcome::Replied(category)
            }
            Err(err) => {
                warn!(model = self.model.name(), error = %err, "model call failed");
                self.transcript.push(Turn::new(
                    text,
                    format!("Error while generating response: {}", err),
                ));
                TurnOutcome::ModelFailure(err)
            }
        }
    }

    /// Current per-day averages, oldest first
    pub fn trend(&self) -> Vec<TrendPoint> {
        aggregate(&self.history.snapshot())
    }

    /// Render the trend chart from current history
    pub fn request_chart(&self) -> ChartView {
        let points = self.trend();
        if points.is_empty() {
            return ChartView::status(NO_DATA_STATUS);
        }

        match self.renderer.render(&points) {
            Ok(path) => {
                info!(path = %path.display(), days = points.len(), "chart written");
                ChartView {
                    image: Some(path),
                    status: String::new(),
                }
            }
            Err(err) => {
                warn!(error = %err, "chart rendering failed");
                ChartView::status(format!("Could not draw the emotion chart: {}", err))
            }
        }
    }

    /// Drop the transcript and all emotion history
    pub fn clear_all(&mut self) -> ChartView {
        self.transcript.clear();
        self.history.clear();
        info!("conversation and emotion history cleared");
        ChartView::empty()
    }
}
