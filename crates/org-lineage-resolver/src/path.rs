// crates/org-lineage-resolver/src/path.rs
// ============================================================================
// Module: Ancestry Path
// Description: Ordered leaf-to-root ancestor chain with enriched OU names.
// Purpose: Give consumers a typed, serializable resolution result.
// Dependencies: org-lineage-core, serde
// ============================================================================

//! ## Overview
//! [`AncestryPath`] is the resolver's result: the ordered ancestor chain
//! from the nearest ancestor of the resolved child up to and including the
//! organization root. Each step is tagged with its type using the provider's
//! wire vocabulary, so serialized paths read like the API they came from.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use org_lineage_core::OuId;
use org_lineage_core::RootId;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Ancestor Step
// ============================================================================

/// One ancestor in a resolved chain.
///
/// # Invariants
/// - Serialized form uses the provider's type vocabulary
///   (`ORGANIZATIONAL_UNIT`, `ROOT`) as the step tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Type")]
pub enum AncestorStep {
    /// Intermediate organizational unit, enriched with its display name.
    #[serde(rename = "ORGANIZATIONAL_UNIT")]
    OrganizationalUnit {
        /// Organizational unit identifier.
        #[serde(rename = "Id")]
        id: OuId,
        /// Display name.
        #[serde(rename = "Name")]
        name: String,
    },
    /// Terminal root of the organization tree.
    #[serde(rename = "ROOT")]
    Root {
        /// Root identifier.
        #[serde(rename = "Id")]
        id: RootId,
    },
}

impl AncestorStep {
    /// Returns the step's identifier as a string slice.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::OrganizationalUnit {
                id, ..
            } => id.as_str(),
            Self::Root {
                id,
            } => id.as_str(),
        }
    }

    /// Returns true for the terminal root step.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self, Self::Root { .. })
    }
}

// ============================================================================
// SECTION: Ancestry Path
// ============================================================================

/// Leaf-to-root ordered ancestor chain.
///
/// # Invariants
/// - Non-empty; the final step is always [`AncestorStep::Root`].
/// - Order is nearest ancestor first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AncestryPath(Vec<AncestorStep>);

impl AncestryPath {
    /// Wraps a completed chain.
    #[must_use]
    pub(crate) fn new(steps: Vec<AncestorStep>) -> Self {
        Self(steps)
    }

    /// Returns the steps in leaf-to-root order.
    #[must_use]
    pub fn steps(&self) -> &[AncestorStep] {
        &self.0
    }

    /// Returns the number of hops to the root.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.0.len()
    }

    /// Returns the terminal root identifier.
    #[must_use]
    pub fn root(&self) -> Option<&RootId> {
        self.0.last().and_then(|step| match step {
            AncestorStep::Root {
                id,
            } => Some(id),
            AncestorStep::OrganizationalUnit {
                ..
            } => None,
        })
    }
}

impl fmt::Display for AncestryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for step in &self.0 {
            if !first {
                f.write_str(" -> ")?;
            }
            f.write_str(step.id())?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AncestryPath {
    type IntoIter = std::slice::Iter<'a, AncestorStep>;
    type Item = &'a AncestorStep;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
