//! Exponential-backoff retry around any [`LlmClient`].

use std::time::Duration;

use async_trait::async_trait;

use crate::client::{CompletionRequest, LlmClient};
use crate::error::LlmError;

/// Tunable parameters for the retry strategy.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts including the first. Values below 1 are treated as 1.
    pub max_attempts: u32,
    /// Delay before the second attempt.
    pub initial_delay: Duration,
    /// Upper bound on the delay between attempts.
    pub max_delay: Duration,
    /// Factor by which the delay grows after each failure.
    pub multiplier: f64,
    /// Deadline for a single attempt.
    pub attempt_timeout: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            multiplier: 2.0,
            attempt_timeout: Duration::from_secs(60),
        }
    }
}

/// Calculate the next backoff delay from the current delay and config.
///
/// The result is clamped to [`RetryConfig::max_delay`].
pub fn next_delay(current: Duration, config: &RetryConfig) -> Duration {
    let next_ms = (current.as_millis() as f64 * config.multiplier) as u64;
    Duration::from_millis(next_ms).min(config.max_delay)
}

/// Decorator that bounds each attempt with a timeout and retries retryable
/// failures with exponential backoff.
pub struct RetryingClient<C> {
    inner: C,
    config: RetryConfig,
}

impl<C: LlmClient> RetryingClient<C> {
    pub fn new(inner: C, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    async fn attempt(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        match tokio::time::timeout(self.config.attempt_timeout, self.inner.complete(request)).await
        {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout(self.config.attempt_timeout)),
        }
    }
}

#[async_trait]
impl<C: LlmClient> LlmClient for RetryingClient<C> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut delay = self.config.initial_delay;
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            match self.attempt(request).await {
                Ok(text) => {
                    if attempt > 1 {
                        tracing::info!(provider = self.inner.name(), attempt, "LLM request succeeded after retry");
                    }
                    return Ok(text);
                }
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    tracing::warn!(
                        provider = self.inner.name(),
                        error = %e,
                        delay_ms = delay.as_millis() as u64,
                        "LLM attempt {attempt} failed, retrying",
                    );
                    tokio::time::sleep(delay).await;
                    delay = next_delay(delay, &self.config);
                }
                Err(e) => {
                    tracing::error!(
                        provider = self.inner.name(),
                        attempt,
                        error = %e,
                        "LLM request failed",
                    );
                    return Err(e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_delay_doubles() {
        let config = RetryConfig::default();
        let d = next_delay(Duration::from_millis(500), &config);
        assert_eq!(d, Duration::from_secs(1));
    }

    #[test]
    fn next_delay_clamps_at_max() {
        let config = RetryConfig {
            max_delay: Duration::from_secs(5),
            ..Default::default()
        };
        let d = next_delay(Duration::from_secs(4), &config);
        assert_eq!(d, Duration::from_secs(5));
    }

    #[test]
    fn full_backoff_sequence() {
        let config = RetryConfig::default();
        let mut delay = config.initial_delay;
        let expected_ms = [500, 1000, 2000, 4000, 8000, 8000];

        for &ms in &expected_ms {
            assert_eq!(delay, Duration::from_millis(ms));
            delay = next_delay(delay, &config);
        }
    }
}
