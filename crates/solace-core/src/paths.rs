//! Path resolution for generated files

use std::path::PathBuf;

const APP_DIR: &str = "solace";
const CHART_FILE: &str = "emotion_chart.svg";

/// Resolves where generated artifacts live
#[derive(Debug, Clone)]
pub struct Paths {
    pub output_dir: PathBuf,
}

impl Paths {
    /// Use the platform cache directory, or the working directory when there is none
    pub fn new() -> Self {
        let output_dir = dirs::cache_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."));
        Self { output_dir }
    }

    /// Chart image path, overwritten on every render
    pub fn chart_file(&self) -> PathBuf {
        self.output_dir.join(CHART_FILE)
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}
