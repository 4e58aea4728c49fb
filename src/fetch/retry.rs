//! Retry policy for transient fetch failures
//!
//! The backoff schedule is deterministic: a fixed base delay doubled (or
//! scaled by the configured multiplier) after every failed attempt.

use crate::config::RetryConfig;
use std::time::Duration;

/// Attempt budget and backoff schedule applied to every fetch
///
/// Attempt numbering is 1-based: the first failure waits `base_delay`,
/// the second `base_delay * multiplier`, and so on. The last attempt's
/// error is propagated without a wait.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts before the last error propagates
    pub max_attempts: u32,
    /// Delay before the second attempt
    pub base_delay: Duration,
    /// Factor applied to the delay after each failed attempt
    pub multiplier: f64,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration, multiplier: f64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            multiplier,
        }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(
            config.max_attempts,
            Duration::from_millis(config.base_delay_ms),
            config.multiplier,
        )
    }

    /// Returns the delay to sleep after the given failed attempt
    /// (1-based), before the next one is issued
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.base_delay.mul_f64(self.multiplier.powi(exponent as i32))
    }

    /// Returns true when the given attempt (1-based) is the final one
    pub fn is_last_attempt(&self, attempt: u32) -> bool {
        attempt >= self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_observed_behavior() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.base_delay, Duration::from_millis(1500));
        assert_eq!(policy.multiplier, 2.0);
    }

    #[test]
    fn test_delay_doubles_per_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_millis(1500));
        assert_eq!(policy.delay_after(2), Duration::from_millis(3000));
        assert_eq!(policy.delay_after(3), Duration::from_millis(6000));
    }

    #[test]
    fn test_custom_multiplier() {
        let policy = RetryPolicy::new(5, Duration::from_millis(100), 3.0);
        assert_eq!(policy.delay_after(1), Duration::from_millis(100));
        assert_eq!(policy.delay_after(2), Duration::from_millis(300));
        assert_eq!(policy.delay_after(3), Duration::from_millis(900));
    }

    #[test]
    fn test_last_attempt_detection() {
        let policy = RetryPolicy::default();
        assert!(!policy.is_last_attempt(1));
        assert!(!policy.is_last_attempt(2));
        assert!(policy.is_last_attempt(3));
        assert!(policy.is_last_attempt(4));
    }

    #[test]
    fn test_zero_attempts_clamps_to_one() {
        let policy = RetryPolicy::new(0, Duration::from_millis(100), 2.0);
        assert_eq!(policy.max_attempts, 1);
        assert!(policy.is_last_attempt(1));
    }

    #[test]
    fn test_large_attempt_does_not_overflow() {
        let policy = RetryPolicy::default();
        // The exponent is capped; the result just has to be a valid Duration.
        let _ = policy.delay_after(u32::MAX);
    }
}
