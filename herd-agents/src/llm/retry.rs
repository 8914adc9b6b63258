use std::time::Duration;

use super::{CompletionClient, CompletionError, CompletionRequest};

/// Bounded retry for overloaded-service failures: `max_attempts` calls
/// total, doubling backoff starting at `base_delay` (2 s, then 4 s with
/// the defaults).
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Delay before attempt `failed_attempts + 1`.
    pub fn backoff_delay(&self, failed_attempts: u32) -> Duration {
        self.base_delay * 2u32.pow(failed_attempts.saturating_sub(1))
    }
}

enum RetryState {
    Attempting(u32),
    Backoff(u32),
    Exhausted,
}

/// Call the completion service under `policy`.
///
/// Returns `Ok(Some(text))` on success, `Ok(None)` when every attempt
/// came back overloaded (the caller degrades to its fallback reply),
/// and `Err` immediately on any non-retryable failure.
pub async fn complete_with_retry(
    client: &dyn CompletionClient,
    request: &CompletionRequest,
    policy: &RetryPolicy,
) -> Result<Option<String>, CompletionError> {
    let mut state = RetryState::Attempting(1);

    loop {
        state = match state {
            RetryState::Attempting(attempt) => match client.complete(request).await {
                Ok(text) => return Ok(Some(text)),
                Err(CompletionError::Overloaded) if attempt < policy.max_attempts => {
                    RetryState::Backoff(attempt)
                }
                Err(CompletionError::Overloaded) => RetryState::Exhausted,
                Err(error) => return Err(error),
            },
            RetryState::Backoff(failed_attempts) => {
                let delay = policy.backoff_delay(failed_attempts);
                tracing::warn!(
                    attempt = failed_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "completion service overloaded, backing off"
                );
                tokio::time::sleep(delay).await;
                RetryState::Attempting(failed_attempts + 1)
            }
            RetryState::Exhausted => {
                tracing::warn!(
                    attempts = policy.max_attempts,
                    "completion service still overloaded, giving up"
                );
                return Ok(None);
            }
        };
    }
}
