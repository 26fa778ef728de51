// crates/org-lineage-core/src/retry.rs
// ============================================================================
// Module: Retry Policy
// Description: Bounded exponential backoff for retryable service faults.
// Purpose: Keep retry behavior explicit, configurable, and testable.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Retry handling for throttled and transport faults. The policy computes
//! exponentially doubling delays capped at a maximum; the [`Sleeper`] seam
//! lets tests observe delays without sleeping for real. Non-retryable errors
//! never reach this module.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default maximum attempts per call (first try plus retries).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 4;
/// Default base delay before the first retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(50);
/// Default cap on any single retry delay.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(2);

// ============================================================================
// SECTION: Retry Policy
// ============================================================================

/// Bounded exponential backoff policy.
///
/// # Invariants
/// - `max_attempts >= 1`; attempt 1 is the initial call.
/// - Delay doubles per retry and never exceeds `max_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum attempts per call, including the initial call.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Cap applied to every computed delay.
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Returns the delay to sleep before the retry following `attempt`.
    ///
    /// `attempt` is 1-based; the delay after attempt `n` is
    /// `base_delay * 2^(n-1)` capped at `max_delay`.
    #[must_use]
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        let factor = 1u32 << exponent;
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }

    /// Returns true when another attempt is permitted after `attempt`.
    #[must_use]
    pub const fn allows_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

// ============================================================================
// SECTION: Sleeper
// ============================================================================

/// Sleep seam so retry delays are observable in tests.
pub trait Sleeper: Send + Sync {
    /// Sleeps for the given duration.
    fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the current thread.
///
/// # Invariants
/// - Blocks the calling thread for the full duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
