//! Bounded retry with exponential backoff

use solace_core::{Config, ModelError};
use std::time::Duration;

const MAX_DELAY: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_retries, config.retry_base_delay)
    }

    /// `retries_done` counts retries already made, not the first attempt
    pub fn should_retry(&self, retries_done: u32, err: &ModelError) -> bool {
        retries_done < self.max_retries && err.is_transient()
    }

    /// Delay before the given retry (1-based), doubling each time and capped
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(MAX_DELAY)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(2, Duration::from_millis(500))
    }
}
