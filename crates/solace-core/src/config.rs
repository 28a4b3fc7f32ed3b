//! Runtime configuration

use crate::error::ConfigError;
use crate::paths::Paths;
use std::path::PathBuf;
use std::time::Duration;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "SOLACE_MODEL";
pub const TIMEOUT_VAR: &str = "SOLACE_TIMEOUT_SECS";
pub const MAX_RETRIES_VAR: &str = "SOLACE_MAX_RETRIES";
pub const CHART_PATH_VAR: &str = "SOLACE_CHART_PATH";

pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";

/// Companion configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Model service credential
    pub api_key: String,

    /// Model identifier passed to the service
    pub model: String,

    /// Per-request timeout for model calls
    pub request_timeout: Duration,

    /// Extra attempts after a transient model failure
    pub max_retries: u32,

    /// Delay before the first retry, doubled on each further retry
    pub retry_base_delay: Duration,

    /// Where the trend chart is written
    pub chart_path: PathBuf,
}

impl Config {
    pub fn new() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: Duration::from_secs(60),
            max_retries: 2,
            retry_base_delay: Duration::from_millis(500),
            chart_path: Paths::new().chart_file(),
        }
    }

    /// Load from process environment. A missing API key is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        config.api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey { var: API_KEY_VAR })?;

        if let Some(model) = non_empty(lookup(MODEL_VAR)) {
            config.model = model;
        }
        if let Some(raw) = non_empty(lookup(TIMEOUT_VAR)) {
            let secs: u64 = parse_var(TIMEOUT_VAR, &raw)?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    var: TIMEOUT_VAR,
                    value: raw,
                    reason: "timeout must be at least one second".to_string(),
                });
            }
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = non_empty(lookup(MAX_RETRIES_VAR)) {
            config.max_retries = parse_var(MAX_RETRIES_VAR, &raw)?;
        }
        if let Some(path) = non_empty(lookup(CHART_PATH_VAR)) {
            config.chart_path = PathBuf::from(path);
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.model, "gemini-1.5-pro-latest");
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.max_retries, 2);
        assert!(config.chart_path.ends_with("emotion_chart.svg"));
    }

    #[test]
    fn test_missing_key_is_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let err = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));
    }

    #[test]
    fn test_key_is_trimmed() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, " abc \n")])).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "k"),
            (MODEL_VAR, "gemini-2.0-flash"),
            (TIMEOUT_VAR, "15"),
            (MAX_RETRIES_VAR, "0"),
            (CHART_PATH_VAR, "/tmp/trend.svg"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.chart_path, PathBuf::from("/tmp/trend.svg"));
    }

    #[test]
    fn test_invalid_number() {
        let err = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "k"),
            (MAX_RETRIES_VAR, "lots"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: MAX_RETRIES_VAR,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err =
            Config::from_lookup(lookup_from(&[(API_KEY_VAR, "k"), (TIMEOUT_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        let original = std::env::var(API_KEY_VAR).ok();

        std::env::set_var(API_KEY_VAR, "env-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "env-key");

        std::env::remove_var(API_KEY_VAR);
        assert!(Config::from_env().is_err());

        if let Some(value) = original {
            std::env::set_var(API_KEY_VAR, value);
        }
    }
}
