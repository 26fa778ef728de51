// crates/org-lineage-core/src/client.rs
// ============================================================================
// Module: Organization Client Adapter
// Description: Pagination-draining, retrying wrapper over the API seam.
// Purpose: Give consumers complete parent lists without cursor handling.
// Dependencies: crate::api, crate::retry, crate::telemetry
// ============================================================================

//! ## Overview
//! [`OrganizationClient`] wraps any [`OrganizationsApi`] implementation and
//! owns the two concerns the page-level seam leaves out: draining pagination
//! cursors until a list call is exhausted, and retrying throttled or
//! transport faults with bounded backoff. Raw cursors never escape this
//! adapter.
//! Invariants:
//! - A cursor chain longer than [`MAX_PARENT_PAGES`] fails closed.
//! - Only retryable faults are retried; taxonomy errors propagate on first
//!   occurrence.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::api::OrgApiError;
use crate::api::OrganizationsApi;
use crate::identifiers::ChildId;
use crate::identifiers::OuId;
use crate::identifiers::PaginationToken;
use crate::model::Organization;
use crate::model::OrganizationalUnit;
use crate::model::ParentReference;
use crate::retry::RetryPolicy;
use crate::retry::Sleeper;
use crate::retry::ThreadSleeper;
use crate::telemetry::LineageTelemetry;
use crate::telemetry::NoopTelemetry;
use crate::telemetry::OrgCall;
use crate::telemetry::RetryEvent;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum pages drained for one `ListParents` call.
///
/// The provider returns at most one parent per child, so a legitimate chain
/// is one or two pages long; anything near this bound is a protocol break.
pub const MAX_PARENT_PAGES: usize = 16;

// ============================================================================
// SECTION: Client Adapter
// ============================================================================

/// Retrying, pagination-draining client over an [`OrganizationsApi`].
///
/// # Invariants
/// - Stateless between calls; safely shared across threads for concurrent
///   resolutions of distinct children.
/// - Pagination tokens are consumed internally and never surfaced.
pub struct OrganizationClient<A> {
    /// Backend implementation of the page-level API.
    api: A,
    /// Retry policy applied to every call.
    retry: RetryPolicy,
    /// Sleep seam for backoff delays.
    sleeper: Arc<dyn Sleeper>,
    /// Telemetry sink for retry and failure events.
    telemetry: Arc<dyn LineageTelemetry>,
}

impl<A: OrganizationsApi> OrganizationClient<A> {
    /// Creates a client with default retry policy and no-op telemetry.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            retry: RetryPolicy::default(),
            sleeper: Arc::new(ThreadSleeper),
            telemetry: Arc::new(NoopTelemetry),
        }
    }

    /// Replaces the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Replaces the sleep seam.
    #[must_use]
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn LineageTelemetry>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns the telemetry sink shared by this client.
    #[must_use]
    pub fn telemetry(&self) -> Arc<dyn LineageTelemetry> {
        Arc::clone(&self.telemetry)
    }

    /// Returns the organization's static metadata.
    ///
    /// # Errors
    ///
    /// Returns [`OrgApiError`] when the call fails after bounded retries.
    pub fn describe_organization(&self) -> Result<Organization, OrgApiError> {
        self.call_with_retry(OrgCall::DescribeOrganization, || self.api.describe_organization())
    }

    /// Returns all immediate parents of the child, draining pagination.
    ///
    /// # Errors
    ///
    /// Returns [`OrgApiError::RunawayPagination`] when the cursor chain
    /// exceeds [`MAX_PARENT_PAGES`], or the underlying call error after
    /// bounded retries.
    pub fn list_parents(&self, child: &ChildId) -> Result<Vec<ParentReference>, OrgApiError> {
        let mut parents = Vec::new();
        let mut cursor: Option<PaginationToken> = None;
        for _ in 0..MAX_PARENT_PAGES {
            let page = self.call_with_retry(OrgCall::ListParents, || {
                self.api.list_parents_page(child, cursor.as_ref())
            })?;
            parents.extend(page.parents);
            match page.next_token {
                Some(token) => cursor = Some(token),
                None => return Ok(parents),
            }
        }
        Err(OrgApiError::RunawayPagination {
            max_pages: MAX_PARENT_PAGES,
        })
    }

    /// Resolves an organizational unit id to its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`OrgApiError`] when the call fails after bounded retries.
    pub fn describe_organizational_unit(
        &self,
        ou: &OuId,
    ) -> Result<OrganizationalUnit, OrgApiError> {
        self.call_with_retry(OrgCall::DescribeOrganizationalUnit, || {
            self.api.describe_organizational_unit(ou)
        })
    }

    /// Runs an operation under the retry policy.
    ///
    /// Retryable faults back off and retry until the attempt budget is
    /// exhausted; everything else propagates immediately.
    fn call_with_retry<T>(
        &self,
        call: OrgCall,
        mut operation: impl FnMut() -> Result<T, OrgApiError>,
    ) -> Result<T, OrgApiError> {
        let mut attempt = 1u32;
        loop {
            match operation() {
                Ok(value) => return Ok(value),
                Err(error) if error.is_retryable() && self.retry.allows_retry(attempt) => {
                    let delay = self.retry.delay_after(attempt);
                    self.telemetry.call_retried(RetryEvent {
                        call,
                        attempt,
                        delay,
                    });
                    self.sleeper.sleep(delay);
                    attempt += 1;
                }
                Err(error) => {
                    self.telemetry.call_failed(call, &error);
                    return Err(error);
                }
            }
        }
    }
}
