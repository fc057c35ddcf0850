//! Retry policy for provider calls.
//!
//! # Retry Strategy
//!
//! - Max 5 attempts in total
//! - No pause before the first attempt
//! - Exponential backoff before each later attempt: 1s -> 2s -> 4s -> 8s,
//!   capped at 10s

use std::time::Duration;

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first (default: 5)
    pub max_attempts: usize,
    /// Pause before the second attempt in milliseconds (default: 1000)
    pub initial_delay_ms: u64,
    /// Upper bound for any pause in milliseconds (default: 10000)
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay_ms: 1000,
            max_delay_ms: 10_000,
        }
    }
}

impl RetryPolicy {
    /// Create a new retry policy with custom settings.
    pub fn new(max_attempts: usize, initial_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            max_attempts,
            initial_delay_ms,
            max_delay_ms,
        }
    }

    /// Pause to take before attempt `attempt` (0-indexed).
    ///
    /// Zero for the first attempt, then `initial * 2^(attempt-1)`, capped at
    /// `max_delay_ms`.
    pub fn delay_before_attempt(&self, attempt: usize) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        let exponent = (attempt - 1).min(63) as u32;
        let delay_ms = self
            .initial_delay_ms
            .saturating_mul(2u64.saturating_pow(exponent))
            .min(self.max_delay_ms);
        Duration::from_millis(delay_ms)
    }

    /// Check if attempt `attempt` (0-indexed) is allowed.
    pub fn allows_attempt(&self, attempt: usize) -> bool {
        attempt < self.max_attempts.max(1)
    }
}
