// crates/org-lineage-core/tests/client_pagination.rs
// ============================================================================
// Module: Client Adapter Unit Tests
// Description: Pagination draining and retry behavior of the client adapter.
// Purpose: Ensure cursors never escape and backoff stays bounded.
// ============================================================================

//! ## Overview
//! Exercises [`OrganizationClient`] against a scripted in-test backend:
//! multi-page cursor drains, the runaway-pagination bound, bounded backoff
//! for throttled calls, and immediate propagation of non-retryable faults.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use org_lineage_core::ChildId;
use org_lineage_core::MAX_PARENT_PAGES;
use org_lineage_core::OrgApiError;
use org_lineage_core::Organization;
use org_lineage_core::OrganizationClient;
use org_lineage_core::OrganizationalUnit;
use org_lineage_core::OrganizationsApi;
use org_lineage_core::OuId;
use org_lineage_core::PaginationToken;
use org_lineage_core::ParentPage;
use org_lineage_core::ParentReference;
use org_lineage_core::ParentType;
use org_lineage_core::RetryPolicy;
use org_lineage_core::Sleeper;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// One scripted response for a `ListParents` page call.
enum Script {
    /// Return the page.
    Page(ParentPage),
    /// Fail with a throttle.
    Throttle,
    /// Fail with an access denial.
    AccessDenied,
}

/// Scripted backend recording the cursors it was handed.
struct ScriptedApi {
    /// Responses consumed in order; the last entry repeats once exhausted.
    script: Mutex<VecDeque<Script>>,
    /// Cursor values observed per call.
    cursors: Mutex<Vec<Option<String>>>,
}

impl ScriptedApi {
    fn new(script: Vec<Script>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            cursors: Mutex::new(Vec::new()),
        }
    }

    fn observed_cursors(&self) -> Vec<Option<String>> {
        self.cursors.lock().unwrap().clone()
    }

    fn calls(&self) -> usize {
        self.cursors.lock().unwrap().len()
    }
}

impl OrganizationsApi for ScriptedApi {
    fn describe_organization(&self) -> Result<Organization, OrgApiError> {
        Err(OrgApiError::Malformed("describe_organization is not scripted".to_string()))
    }

    fn list_parents_page(
        &self,
        _child: &ChildId,
        cursor: Option<&PaginationToken>,
    ) -> Result<ParentPage, OrgApiError> {
        self.cursors.lock().unwrap().push(cursor.map(|token| token.as_str().to_string()));
        let mut script = self.script.lock().unwrap();
        let next = if script.len() > 1 {
            script.pop_front()
        } else {
            script.front().map(|entry| match entry {
                Script::Page(page) => Script::Page(page.clone()),
                Script::Throttle => Script::Throttle,
                Script::AccessDenied => Script::AccessDenied,
            })
        };
        match next {
            Some(Script::Page(page)) => Ok(page),
            Some(Script::Throttle) => Err(OrgApiError::Throttled),
            Some(Script::AccessDenied) => {
                Err(OrgApiError::AccessDenied("not authorized".to_string()))
            }
            None => Err(OrgApiError::Malformed("script exhausted".to_string())),
        }
    }

    fn describe_organizational_unit(&self, ou: &OuId) -> Result<OrganizationalUnit, OrgApiError> {
        Err(OrgApiError::NotFound {
            id: ou.as_str().to_string(),
        })
    }
}

/// Sleeper that records requested delays instead of sleeping.
#[derive(Default)]
struct RecordingSleeper {
    /// Delays requested by the retry loop.
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    fn recorded(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

fn ou_page(id: &str, token: Option<&str>) -> ParentPage {
    ParentPage {
        parents: vec![ParentReference {
            id: id.to_string(),
            parent_type: ParentType::OrganizationalUnit,
        }],
        next_token: token.map(|value| PaginationToken::new(value).unwrap()),
    }
}

fn root_page() -> ParentPage {
    ParentPage {
        parents: vec![ParentReference {
            id: "r-k9s7".to_string(),
            parent_type: ParentType::Root,
        }],
        next_token: None,
    }
}

fn sample_child() -> ChildId {
    ChildId::from_str("111111111111").unwrap()
}

// ============================================================================
// SECTION: Pagination
// ============================================================================

#[test]
fn list_parents_drains_cursor_chain_and_concatenates() {
    let api = Arc::new(ScriptedApi::new(vec![
        Script::Page(ou_page("ou-k9s7-a1b2c3d4", Some("cursor-1"))),
        Script::Page(root_page()),
    ]));
    let client = OrganizationClient::new(Arc::clone(&api));
    let parents = client.list_parents(&sample_child()).unwrap();
    assert_eq!(parents.len(), 2);
    assert_eq!(parents[0].id, "ou-k9s7-a1b2c3d4");
    assert_eq!(parents[1].parent_type, ParentType::Root);
    assert_eq!(api.observed_cursors(), vec![None, Some("cursor-1".to_string())]);
}

#[test]
fn list_parents_fails_closed_on_runaway_cursor_chain() {
    let api = Arc::new(ScriptedApi::new(vec![Script::Page(ou_page(
        "ou-k9s7-a1b2c3d4",
        Some("cursor-again"),
    ))]));
    let client = OrganizationClient::new(Arc::clone(&api));
    let error = client.list_parents(&sample_child()).unwrap_err();
    assert!(matches!(
        error,
        OrgApiError::RunawayPagination {
            max_pages: MAX_PARENT_PAGES
        }
    ));
    assert_eq!(api.calls(), MAX_PARENT_PAGES);
}

// ============================================================================
// SECTION: Retry
// ============================================================================

#[test]
fn throttled_calls_back_off_then_succeed() {
    let api = ScriptedApi::new(vec![Script::Throttle, Script::Throttle, Script::Page(root_page())]);
    let sleeper = Arc::new(RecordingSleeper::default());
    let client = OrganizationClient::new(api)
        .with_retry_policy(RetryPolicy {
            max_attempts: 4,
            base_delay: Duration::from_millis(50),
            max_delay: Duration::from_secs(2),
        })
        .with_sleeper(Arc::<RecordingSleeper>::clone(&sleeper));
    let parents = client.list_parents(&sample_child()).unwrap();
    assert_eq!(parents.len(), 1);
    assert_eq!(
        sleeper.recorded(),
        vec![Duration::from_millis(50), Duration::from_millis(100)]
    );
}

#[test]
fn throttled_calls_fail_after_attempt_budget() {
    let api = Arc::new(ScriptedApi::new(vec![Script::Throttle]));
    let sleeper = Arc::new(RecordingSleeper::default());
    let client = OrganizationClient::new(Arc::clone(&api))
        .with_retry_policy(RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(10),
            max_delay: Duration::from_millis(15),
        })
        .with_sleeper(Arc::<RecordingSleeper>::clone(&sleeper));
    let error = client.list_parents(&sample_child()).unwrap_err();
    assert!(matches!(error, OrgApiError::Throttled));
    assert_eq!(api.calls(), 3);
    // Second delay hits the cap.
    assert_eq!(
        sleeper.recorded(),
        vec![Duration::from_millis(10), Duration::from_millis(15)]
    );
}

#[test]
fn access_denied_is_never_retried() {
    let api = Arc::new(ScriptedApi::new(vec![Script::AccessDenied]));
    let sleeper = Arc::new(RecordingSleeper::default());
    let client =
        OrganizationClient::new(Arc::clone(&api)).with_sleeper(Arc::<RecordingSleeper>::clone(&sleeper));
    let error = client.list_parents(&sample_child()).unwrap_err();
    assert!(matches!(error, OrgApiError::AccessDenied(_)));
    assert_eq!(api.calls(), 1);
    assert!(sleeper.recorded().is_empty());
}
