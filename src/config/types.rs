use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing configuration for a [`Handler`](crate::Handler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Quiet period in milliseconds before the latest model is delivered.
    /// `0` disables debouncing: every change is delivered (default: 0).
    #[serde(default)]
    pub debounce_ms: u64,
    /// Delay in milliseconds between `send` and the fold of that command
    /// (default: 1). Must be non-zero.
    #[serde(default = "default_intake_delay_ms")]
    pub intake_delay_ms: u64,
}

fn default_intake_delay_ms() -> u64 {
    1
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 0,
            intake_delay_ms: default_intake_delay_ms(),
        }
    }
}

impl HandlerConfig {
    /// Returns a copy with the debounce window set to `window`.
    ///
    /// Sub-millisecond precision is truncated; `Duration::ZERO` disables
    /// debouncing.
    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce_ms = u64::try_from(window.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn intake_delay(&self) -> Duration {
        Duration::from_millis(self.intake_delay_ms)
    }
}
