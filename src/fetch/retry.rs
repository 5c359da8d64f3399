//! Retry with exponential backoff
//!
//! Generic over any fallible operation. The delay after failed attempt `n`
//! (0-based) is `base_delay * 2^n`; there is no jitter and no sleep after the
//! final attempt.

use std::fmt::Display;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Policy that runs the operation exactly once.
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }

    pub fn delay_for(&self, attempt_index: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt_index).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }
}

/// Runs `operation` until it succeeds or `policy.max_attempts` is exhausted,
/// returning the most recent error in the latter case.
pub fn call_with_retry<T, E, F>(policy: &RetryPolicy, operation: F) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: Display,
{
    call_with_retry_when(policy, operation, |_| true)
}

/// Like [`call_with_retry`], but gives up immediately on errors for which
/// `should_retry` returns false.
pub fn call_with_retry_when<T, E, F, P>(
    policy: &RetryPolicy,
    mut operation: F,
    should_retry: P,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    P: Fn(&E) -> bool,
    E: Display,
{
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match operation() {
            Ok(value) => {
                if attempt > 0 {
                    debug!(attempt = attempt + 1, "Operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(e) => {
                let last = attempt + 1 >= attempts;
                if last || !should_retry(&e) {
                    warn!(
                        attempt = attempt + 1,
                        max_attempts = attempts,
                        error = %e,
                        "Giving up"
                    );
                    return Err(e);
                }

                let delay = policy.delay_for(attempt);
                warn!(
                    attempt = attempt + 1,
                    max_attempts = attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Attempt failed, retrying"
                );
                thread::sleep(delay);
                attempt += 1;
            }
        }
    }
}
