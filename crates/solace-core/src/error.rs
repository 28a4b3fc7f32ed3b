//! Error types shared across the workspace

use std::time::Duration;
use thiserror::Error;

/// Failure to get a usable reply from the language model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("prompt was blocked by the service ({0})")]
    Blocked(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("could not start model runtime: {0}")]
    Runtime(String),
}

impl ModelError {
    /// Whether another attempt could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ModelError::Transport(_) | ModelError::Timeout(_) => true,
            ModelError::Status { status, .. } => *status == 429 || *status >= 500,
            ModelError::Blocked(_) | ModelError::Malformed(_) | ModelError::Runtime(_) => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to draw chart: {0}")]
    Render(String),

    #[error("failed to write chart: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Missing {var}. Set it as an environment variable before running.\n\
         Example (Linux/macOS): export {var}='YOUR_KEY'\n\
         Example (Windows PowerShell): setx {var} 'YOUR_KEY'"
    )]
    MissingApiKey { var: &'static str },

    #[error("Invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}
