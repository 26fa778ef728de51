// crates/org-lineage-fixtures/src/adapter.rs
// ============================================================================
// Module: Fixture Adapter
// Description: Scripted implementation of the organizations interface.
// Purpose: Serve canned pages and faults keyed by entity identifier.
// Dependencies: org-lineage-core
// ============================================================================

//! ## Overview
//! [`FixtureOrganizations`] serves responses from a [`FixtureSet`] built at
//! construction. Each child id owns an ordered script of pages and faults;
//! the script is consumed per call and its final entry repeats once the
//! queue drains, which lets a single no-cursor page model a repeating-parent
//! loop. The adapter verifies cursor echo: a cursor it handed out must come
//! back on the follow-up call, and an unexpected cursor is a malformed
//! request.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::PoisonError;

use org_lineage_core::ChildId;
use org_lineage_core::OrgApiError;
use org_lineage_core::Organization;
use org_lineage_core::OrganizationalUnit;
use org_lineage_core::OrganizationsApi;
use org_lineage_core::OuId;
use org_lineage_core::PaginationToken;
use org_lineage_core::ParentPage;
use org_lineage_core::ParentReference;
use org_lineage_core::ParentType;

// ============================================================================
// SECTION: Scripts
// ============================================================================

/// Scripted fault kinds mapped onto the API taxonomy.
///
/// # Invariants
/// - Variants are stable for programmatic handling in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Service throttle (retryable).
    Throttled,
    /// Transport failure (retryable).
    Transport,
    /// Permission or membership failure.
    AccessDenied,
    /// Entity does not exist.
    NotFound,
}

impl Fault {
    /// Converts the fault into the taxonomy error for the given id.
    fn to_error(self, id: &str) -> OrgApiError {
        match self {
            Self::Throttled => OrgApiError::Throttled,
            Self::Transport => OrgApiError::Transport("fixture transport fault".to_string()),
            Self::AccessDenied => {
                OrgApiError::AccessDenied("fixture denied the calling identity".to_string())
            }
            Self::NotFound => OrgApiError::NotFound {
                id: id.to_string(),
            },
        }
    }
}

/// One scripted response for a `ListParents` page call.
#[derive(Debug, Clone)]
pub enum ParentScript {
    /// Serve the page.
    Page(ParentPage),
    /// Fail with the fault.
    Fault(Fault),
}

/// One scripted response for a `DescribeOrganizationalUnit` call.
#[derive(Debug, Clone)]
pub enum UnitScript {
    /// Serve the unit.
    Unit(OrganizationalUnit),
    /// Fail with the fault.
    Fault(Fault),
}

// ============================================================================
// SECTION: Fixture Set
// ============================================================================

/// Immutable fixture values an adapter is constructed from.
///
/// # Invariants
/// - Scripts are keyed by the raw identifier string they answer for.
/// - An entity with no script is served as not found.
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    /// Organization served by `DescribeOrganization`, when any.
    pub organization: Option<Organization>,
    /// Parent page scripts keyed by child id.
    pub parent_scripts: BTreeMap<String, Vec<ParentScript>>,
    /// Unit scripts keyed by organizational unit id.
    pub unit_scripts: BTreeMap<String, Vec<UnitScript>>,
}

impl FixtureSet {
    /// Creates an empty fixture set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the organization served by `DescribeOrganization`.
    #[must_use]
    pub fn with_organization(mut self, organization: Organization) -> Self {
        self.organization = Some(organization);
        self
    }

    /// Replaces the parent script for one child.
    #[must_use]
    pub fn with_parent_script(mut self, child: &str, script: Vec<ParentScript>) -> Self {
        self.parent_scripts.insert(child.to_string(), script);
        self
    }

    /// Replaces the unit script for one organizational unit.
    #[must_use]
    pub fn with_unit_script(mut self, ou: &str, script: Vec<UnitScript>) -> Self {
        self.unit_scripts.insert(ou.to_string(), script);
        self
    }

    /// Registers a describable unit served indefinitely.
    #[must_use]
    pub fn with_unit(self, unit: OrganizationalUnit) -> Self {
        let id = unit.id.clone();
        self.with_unit_script(&id, vec![UnitScript::Unit(unit)])
    }

    /// Builds the scripts a leaf-to-root walk consumes.
    ///
    /// For `child -> ous[0] -> ... -> root`, every hop gets a first page
    /// carrying its single parent plus a present cursor, followed by an
    /// empty terminal page, so the consumer's pagination drain runs on every
    /// hop. Each `(id, name)` entry also registers the describable unit.
    #[must_use]
    pub fn with_parent_chain(mut self, child: &str, ous: &[(&str, &str)], root: &str) -> Self {
        let mut current = child.to_string();
        for (ou_id, ou_name) in ous {
            self = self
                .with_parent_script(
                    &current,
                    paged_single_parent(&current, ou_id, ParentType::OrganizationalUnit),
                )
                .with_unit(OrganizationalUnit {
                    id: (*ou_id).to_string(),
                    arn: format!("arn:aws:organizations:::ou/{ou_id}"),
                    name: (*ou_name).to_string(),
                });
            current = (*ou_id).to_string();
        }
        self.with_parent_script(&current, paged_single_parent(&current, root, ParentType::Root))
    }
}

/// Builds a two-page script serving one parent then an empty terminal page.
fn paged_single_parent(child: &str, parent_id: &str, parent_type: ParentType) -> Vec<ParentScript> {
    let token = PaginationToken::new(format!("cursor-{child}")).ok();
    vec![
        ParentScript::Page(ParentPage {
            parents: vec![ParentReference {
                id: parent_id.to_string(),
                parent_type,
            }],
            next_token: token,
        }),
        ParentScript::Page(ParentPage {
            parents: Vec::new(),
            next_token: None,
        }),
    ]
}

// ============================================================================
// SECTION: Adapter State
// ============================================================================

/// Mutable adapter state behind one lock.
#[derive(Debug, Default)]
struct FixtureState {
    /// Remaining parent scripts per child; the last entry repeats.
    parent_queues: BTreeMap<String, VecDeque<ParentScript>>,
    /// Remaining unit scripts per unit; the last entry repeats.
    unit_queues: BTreeMap<String, VecDeque<UnitScript>>,
    /// Cursor each child's next page call must echo.
    expected_cursors: BTreeMap<String, Option<String>>,
    /// `ListParents` call counts per child.
    parent_calls: BTreeMap<String, usize>,
    /// `DescribeOrganizationalUnit` call counts per unit.
    unit_calls: BTreeMap<String, usize>,
    /// `DescribeOrganization` call count.
    organization_calls: usize,
}

// ============================================================================
// SECTION: Fixture Adapter
// ============================================================================

/// Fixture-backed implementation of [`OrganizationsApi`].
///
/// # Invariants
/// - Constructed from an explicit [`FixtureSet`]; holds no ambient state.
/// - Call counters are observable for assertion in tests.
pub struct FixtureOrganizations {
    /// Organization served by `DescribeOrganization`.
    organization: Option<Organization>,
    /// Scripted state consumed per call.
    state: Mutex<FixtureState>,
}

impl FixtureOrganizations {
    /// Creates an adapter serving the given fixture set.
    #[must_use]
    pub fn new(set: FixtureSet) -> Self {
        let state = FixtureState {
            parent_queues: set
                .parent_scripts
                .into_iter()
                .map(|(child, script)| (child, script.into_iter().collect()))
                .collect(),
            unit_queues: set
                .unit_scripts
                .into_iter()
                .map(|(ou, script)| (ou, script.into_iter().collect()))
                .collect(),
            ..FixtureState::default()
        };
        Self {
            organization: set.organization,
            state: Mutex::new(state),
        }
    }

    /// Returns how many `ListParents` pages were requested for the child.
    #[must_use]
    pub fn list_parents_calls(&self, child: &str) -> usize {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.parent_calls.get(child).copied().unwrap_or(0)
    }

    /// Returns how many times the unit was described.
    #[must_use]
    pub fn describe_unit_calls(&self, ou: &str) -> usize {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.unit_calls.get(ou).copied().unwrap_or(0)
    }

    /// Returns how many times the organization was described.
    #[must_use]
    pub fn describe_organization_calls(&self) -> usize {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.organization_calls
    }
}

/// Pops the next script entry, repeating the final entry indefinitely.
fn next_script<T: Clone>(queue: &mut VecDeque<T>) -> Option<T> {
    if queue.len() > 1 {
        queue.pop_front()
    } else {
        queue.front().cloned()
    }
}

impl OrganizationsApi for FixtureOrganizations {
    fn describe_organization(&self) -> Result<Organization, OrgApiError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.organization_calls += 1;
        drop(state);
        self.organization.clone().ok_or_else(|| {
            OrgApiError::AccessDenied(
                "calling identity is not a member of an organization".to_string(),
            )
        })
    }

    fn list_parents_page(
        &self,
        child: &ChildId,
        cursor: Option<&PaginationToken>,
    ) -> Result<ParentPage, OrgApiError> {
        let child_key = child.as_str().to_string();
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state.parent_calls.entry(child_key.clone()).or_insert(0) += 1;

        let expected = state.expected_cursors.get(&child_key).cloned().unwrap_or(None);
        let observed = cursor.map(|token| token.as_str().to_string());
        if observed != expected {
            return Err(OrgApiError::Malformed(format!(
                "cursor mismatch for {child_key}: expected {expected:?}, got {observed:?}"
            )));
        }

        let Some(queue) = state.parent_queues.get_mut(&child_key) else {
            return Err(OrgApiError::NotFound {
                id: child_key,
            });
        };
        match next_script(queue) {
            Some(ParentScript::Page(page)) => {
                let handed_out = page.next_token.as_ref().map(|token| token.as_str().to_string());
                state.expected_cursors.insert(child_key, handed_out);
                Ok(page)
            }
            Some(ParentScript::Fault(fault)) => Err(fault.to_error(&child_key)),
            None => Err(OrgApiError::NotFound {
                id: child_key,
            }),
        }
    }

    fn describe_organizational_unit(&self, ou: &OuId) -> Result<OrganizationalUnit, OrgApiError> {
        let ou_key = ou.as_str().to_string();
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state.unit_calls.entry(ou_key.clone()).or_insert(0) += 1;

        let Some(queue) = state.unit_queues.get_mut(&ou_key) else {
            return Err(OrgApiError::NotFound {
                id: ou_key,
            });
        };
        match next_script(queue) {
            Some(UnitScript::Unit(unit)) => Ok(unit),
            Some(UnitScript::Fault(fault)) => Err(fault.to_error(&ou_key)),
            None => Err(OrgApiError::NotFound {
                id: ou_key,
            }),
        }
    }
}
