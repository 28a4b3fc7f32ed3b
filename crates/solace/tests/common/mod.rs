#![allow(dead_code)]

use chrono::NaiveDate;
use solace_core::{
    ChartError, ChartRenderer, Companion, FixedClock, LanguageModel, ModelError, TrendPoint,
};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Replies from a fixed script, one entry per call
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, ModelError>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<String, ModelError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    /// Handle to every prompt the model has seen
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

impl LanguageModel for ScriptedModel {
    fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ModelError::Transport("script exhausted".to_string())))
    }
}

/// Records what it was asked to draw instead of drawing it
pub struct RecordingRenderer {
    pub drawn: Arc<Mutex<Vec<Vec<TrendPoint>>>>,
    path: PathBuf,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            drawn: Arc::new(Mutex::new(Vec::new())),
            path: PathBuf::from("emotion_chart.svg"),
        }
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, points: &[TrendPoint]) -> Result<PathBuf, ChartError> {
        self.drawn.lock().unwrap().push(points.to_vec());
        Ok(self.path.clone())
    }
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

pub fn companion_with(model: ScriptedModel, renderer: impl ChartRenderer + 'static) -> Companion {
    Companion::new(Box::new(model), Box::new(renderer)).with_clock(Box::new(FixedClock(day(10))))
}
