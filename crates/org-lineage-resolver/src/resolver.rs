// crates/org-lineage-resolver/src/resolver.rs
// ============================================================================
// Module: Hierarchy Resolver
// Description: Bounded upward walk from a child entity to the root.
// Purpose: Resolve ancestor chains with retry, caching, and attribution.
// Dependencies: org-lineage-core, thiserror
// ============================================================================

//! ## Overview
//! [`HierarchyResolver`] drives the upward walk: one `ListParents` per hop
//! through the client adapter (which drains pagination and retries
//! transient faults), exactly-one-parent enforcement, OU name enrichment
//! via `DescribeOrganizationalUnit`, and a hard depth bound against cyclic
//! provider responses. Failures carry the child being resolved and the step
//! that failed, never a generic error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use org_lineage_core::ChildId;
use org_lineage_core::OrgApiError;
use org_lineage_core::OrganizationClient;
use org_lineage_core::OrganizationsApi;
use org_lineage_core::OuId;
use org_lineage_core::ParentType;
use org_lineage_core::RootId;
use thiserror::Error;

use crate::path::AncestorStep;
use crate::path::AncestryPath;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Default maximum hops from a child to the root.
///
/// The organization tree has finite depth well under this bound; reaching
/// it means the provider returned a cyclic or non-terminating chain.
pub const MAX_RESOLUTION_DEPTH: usize = 32;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Step of the walk during which a failure occurred.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStep {
    /// Listing the current entity's parents.
    ListParents,
    /// Resolving an organizational unit's display name.
    DescribeOrganizationalUnit,
}

impl fmt::Display for ResolveStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListParents => f.write_str("ListParents"),
            Self::DescribeOrganizationalUnit => f.write_str("DescribeOrganizationalUnit"),
        }
    }
}

/// Resolution errors.
///
/// # Invariants
/// - Every variant names the child the resolution was started for.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A service call failed after the client's bounded retries.
    #[error("{step} failed while resolving {child}: {source}")]
    Api {
        /// Child the resolution was started for.
        child: ChildId,
        /// Step that failed.
        step: ResolveStep,
        /// Underlying API error.
        #[source]
        source: OrgApiError,
    },
    /// The provider returned zero or multiple parents for an entity.
    #[error(
        "malformed hierarchy while resolving {child}: {entity} returned {parent_count} parents, expected exactly one"
    )]
    MalformedHierarchy {
        /// Child the resolution was started for.
        child: ChildId,
        /// Entity whose parent listing violated the contract.
        entity: String,
        /// Number of parents returned.
        parent_count: usize,
    },
    /// No root was reached within the depth bound.
    #[error("no root reached from {child} within {max_depth} hops")]
    CycleDetected {
        /// Child the resolution was started for.
        child: ChildId,
        /// Depth bound that was exceeded.
        max_depth: usize,
    },
}

// ============================================================================
// SECTION: Hierarchy Resolver
// ============================================================================

/// Resolver walking ancestor chains through a client adapter.
///
/// # Invariants
/// - Holds no state across resolutions; one instance serves concurrent
///   resolutions of distinct children.
/// - The backend is chosen by the injected client, never by branching here.
pub struct HierarchyResolver<A> {
    /// Client adapter over the injected backend.
    client: OrganizationClient<A>,
    /// Maximum hops before the walk fails closed.
    max_depth: usize,
}

impl<A: OrganizationsApi> HierarchyResolver<A> {
    /// Creates a resolver with the default depth bound.
    #[must_use]
    pub fn new(client: OrganizationClient<A>) -> Self {
        Self {
            client,
            max_depth: MAX_RESOLUTION_DEPTH,
        }
    }

    /// Replaces the depth bound (clamped to at least one hop).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Returns the client adapter, for callers that also need direct calls.
    #[must_use]
    pub const fn client(&self) -> &OrganizationClient<A> {
        &self.client
    }

    /// Resolves the full ancestor chain from the child to the root.
    ///
    /// The returned path is leaf-to-root ordered: nearest ancestor first,
    /// root last. OU display names are served from a per-pass cache on
    /// repeat lookups.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] naming the child and failing step; see the
    /// variant docs for the taxonomy.
    pub fn resolve(&self, child: &ChildId) -> Result<AncestryPath, ResolveError> {
        let mut steps = Vec::new();
        let mut names: BTreeMap<String, String> = BTreeMap::new();
        let mut current = child.clone();

        for _ in 0..self.max_depth {
            let mut parents = self.client.list_parents(&current).map_err(|source| {
                ResolveError::Api {
                    child: child.clone(),
                    step: ResolveStep::ListParents,
                    source,
                }
            })?;
            let Some(parent) = parents.pop() else {
                return Err(ResolveError::MalformedHierarchy {
                    child: child.clone(),
                    entity: current.as_str().to_string(),
                    parent_count: 0,
                });
            };
            if !parents.is_empty() {
                return Err(ResolveError::MalformedHierarchy {
                    child: child.clone(),
                    entity: current.as_str().to_string(),
                    parent_count: parents.len() + 1,
                });
            }

            match parent.parent_type {
                ParentType::Root => {
                    let id = RootId::new(parent.id)
                        .map_err(|err| malformed_reference(child, &err))?;
                    steps.push(AncestorStep::Root {
                        id,
                    });
                    let path = AncestryPath::new(steps);
                    self.client.telemetry().resolution_completed(child.as_str(), path.hops());
                    return Ok(path);
                }
                ParentType::OrganizationalUnit => {
                    let id = OuId::new(parent.id)
                        .map_err(|err| malformed_reference(child, &err))?;
                    let name = self.unit_name(child, &id, &mut names)?;
                    steps.push(AncestorStep::OrganizationalUnit {
                        id: id.clone(),
                        name,
                    });
                    current = ChildId::OrganizationalUnit(id);
                }
            }
        }

        Err(ResolveError::CycleDetected {
            child: child.clone(),
            max_depth: self.max_depth,
        })
    }

    /// Returns the unit's display name, memoized for this pass.
    fn unit_name(
        &self,
        child: &ChildId,
        id: &OuId,
        names: &mut BTreeMap<String, String>,
    ) -> Result<String, ResolveError> {
        if let Some(name) = names.get(id.as_str()) {
            return Ok(name.clone());
        }
        let unit = self.client.describe_organizational_unit(id).map_err(|source| {
            ResolveError::Api {
                child: child.clone(),
                step: ResolveStep::DescribeOrganizationalUnit,
                source,
            }
        })?;
        names.insert(id.as_str().to_string(), unit.name.clone());
        Ok(unit.name)
    }
}

/// Builds the error for a parent reference whose id fails its type's
/// grammar.
fn malformed_reference(child: &ChildId, err: &org_lineage_core::IdError) -> ResolveError {
    ResolveError::Api {
        child: child.clone(),
        step: ResolveStep::ListParents,
        source: OrgApiError::Malformed(format!("parent reference id mismatch: {err}")),
    }
}
