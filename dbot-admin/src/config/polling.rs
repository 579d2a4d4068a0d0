//! Polling loop timing. Loaded from env; durations in milliseconds unless named `_SECS`.

use anyhow::Result;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PollingConfig {
    /// POLL_INTERVAL_MS: sleep after a successful fetch
    pub interval: Duration,
    /// POLL_ERROR_BACKOFF_MS: sleep after a failed fetch; must exceed `interval`
    pub error_backoff: Duration,
    /// POLL_TIMEOUT_SECS: server-side long-poll wait
    pub timeout: Duration,
    /// STOP_JOIN_TIMEOUT_MS: how long stop() waits for the loop to exit
    pub stop_join_timeout: Duration,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(2000),
            error_backoff: Duration::from_millis(5000),
            timeout: Duration::from_secs(30),
            stop_join_timeout: Duration::from_millis(2000),
        }
    }
}

fn env_u64(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

impl PollingConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            interval: env_u64("POLL_INTERVAL_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.interval),
            error_backoff: env_u64("POLL_ERROR_BACKOFF_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.error_backoff),
            timeout: env_u64("POLL_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            stop_join_timeout: env_u64("STOP_JOIN_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.stop_join_timeout),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            anyhow::bail!("POLL_TIMEOUT_SECS must be greater than zero");
        }
        if self.error_backoff <= self.interval {
            anyhow::bail!(
                "POLL_ERROR_BACKOFF_MS ({}) must be greater than POLL_INTERVAL_MS ({})",
                self.error_backoff.as_millis(),
                self.interval.as_millis()
            );
        }
        Ok(())
    }
}
