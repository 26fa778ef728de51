// crates/org-lineage-fixtures/src/sleeper.rs
// ============================================================================
// Module: Recording Sleeper
// Description: Sleep seam that records delays instead of sleeping.
// Purpose: Make backoff schedules assertable in tests.
// Dependencies: org-lineage-core
// ============================================================================

//! ## Overview
//! [`RecordingSleeper`] implements the core sleep seam without blocking;
//! every requested delay is recorded for later assertion.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::Duration;

use org_lineage_core::Sleeper;

// ============================================================================
// SECTION: Recording Sleeper
// ============================================================================

/// Sleeper that records requested delays instead of sleeping.
///
/// # Invariants
/// - Delays are recorded in request order.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    /// Delays requested so far.
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    /// Creates a sleeper with no recorded delays.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the delays requested so far, in order.
    #[must_use]
    pub fn recorded(&self) -> Vec<Duration> {
        self.delays.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap_or_else(PoisonError::into_inner).push(duration);
    }
}
