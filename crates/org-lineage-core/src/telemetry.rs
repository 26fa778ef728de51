// crates/org-lineage-core/src/telemetry.rs
// ============================================================================
// Module: Lineage Telemetry
// Description: Observability hooks for client calls and resolutions.
// Purpose: Provide structured events without hard observability deps.
// Dependencies: crate::api
// ============================================================================

//! ## Overview
//! This module exposes a thin event interface for retry counters and
//! resolution outcomes. It is intentionally dependency-light so downstream
//! deployments can plug in their metrics or logging stack without redesign.
//! Telemetry must not leak credentials; events carry identifiers and labels
//! only.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use crate::api::OrgApiError;

// ============================================================================
// SECTION: Event Labels
// ============================================================================

/// Organizations call classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgCall {
    /// `DescribeOrganization` call.
    DescribeOrganization,
    /// `ListParents` call (one page).
    ListParents,
    /// `DescribeOrganizationalUnit` call.
    DescribeOrganizationalUnit,
}

impl OrgCall {
    /// Returns a stable label for the call.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DescribeOrganization => "describe_organization",
            Self::ListParents => "list_parents",
            Self::DescribeOrganizationalUnit => "describe_organizational_unit",
        }
    }
}

/// Retry event payload.
///
/// # Invariants
/// - `attempt` is the 1-based attempt that just failed.
#[derive(Debug, Clone, Copy)]
pub struct RetryEvent {
    /// Call being retried.
    pub call: OrgCall,
    /// Attempt that failed and triggered the retry.
    pub attempt: u32,
    /// Backoff delay applied before the next attempt.
    pub delay: Duration,
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Event sink for client calls and resolution outcomes.
pub trait LineageTelemetry: Send + Sync {
    /// Records a retry after a retryable fault.
    fn call_retried(&self, event: RetryEvent);

    /// Records a call that failed after exhausting retries, or failed on a
    /// non-retryable fault.
    fn call_failed(&self, call: OrgCall, error: &OrgApiError);

    /// Records a completed resolution: the child resolved and the number of
    /// hops to the root.
    fn resolution_completed(&self, child: &str, hops: usize);
}

/// No-op telemetry sink.
///
/// # Invariants
/// - Events are intentionally discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetry;

impl LineageTelemetry for NoopTelemetry {
    fn call_retried(&self, _event: RetryEvent) {}

    fn call_failed(&self, _call: OrgCall, _error: &OrgApiError) {}

    fn resolution_completed(&self, _child: &str, _hops: usize) {}
}
