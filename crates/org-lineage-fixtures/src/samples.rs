// crates/org-lineage-fixtures/src/samples.rs
// ============================================================================
// Module: Canned Samples
// Description: Representative response values for each adapter operation.
// Purpose: Mirror the provider's documented response shapes one-to-one.
// Dependencies: org-lineage-core
// ============================================================================

//! ## Overview
//! One canned value per adapter operation and representative scenario: an
//! organization with the full feature set and one enabled service control
//! policy type, an OU-typed parent page with a present cursor, a ROOT-typed
//! parent page, and one organizational unit's metadata. Tests that need a
//! specific topology build a [`FixtureSet`](crate::FixtureSet) instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use org_lineage_core::FeatureSet;
use org_lineage_core::Organization;
use org_lineage_core::OrganizationalUnit;
use org_lineage_core::PaginationToken;
use org_lineage_core::ParentPage;
use org_lineage_core::ParentReference;
use org_lineage_core::ParentType;
use org_lineage_core::PolicyType;
use org_lineage_core::PolicyTypeStatus;
use org_lineage_core::PolicyTypeSummary;

// ============================================================================
// SECTION: Sample Identifiers
// ============================================================================

/// Sample organization id.
pub const SAMPLE_ORG_ID: &str = "o-k9s7p2q4x1";
/// Sample management account id.
pub const SAMPLE_MASTER_ACCOUNT_ID: &str = "111111111111";
/// Sample organizational unit id.
pub const SAMPLE_OU_ID: &str = "ou-k9s7-a1b2c3d4";
/// Sample root id.
pub const SAMPLE_ROOT_ID: &str = "r-k9s7";
/// Sample organizational unit display name.
pub const SAMPLE_OU_NAME: &str = "workloads";

// ============================================================================
// SECTION: Samples
// ============================================================================

/// Organization with the full feature set and one enabled policy type.
#[must_use]
pub fn sample_organization() -> Organization {
    Organization {
        id: SAMPLE_ORG_ID.to_string(),
        arn: format!(
            "arn:aws:organizations::{SAMPLE_MASTER_ACCOUNT_ID}:organization/{SAMPLE_ORG_ID}"
        ),
        feature_set: FeatureSet::All,
        master_account_arn: format!(
            "arn:aws:organizations::{SAMPLE_MASTER_ACCOUNT_ID}:account/{SAMPLE_ORG_ID}/{SAMPLE_MASTER_ACCOUNT_ID}"
        ),
        master_account_id: SAMPLE_MASTER_ACCOUNT_ID.to_string(),
        master_account_email: "ops@example.com".to_string(),
        available_policy_types: vec![PolicyTypeSummary {
            policy_type: PolicyType::ServiceControlPolicy,
            status: PolicyTypeStatus::Enabled,
        }],
    }
}

/// Parent page with one OU-typed parent and a present cursor.
///
/// The cursor is present even though the scenario is single-page, so
/// consumers' pagination handling runs on the non-root branch.
#[must_use]
pub fn sample_parent_page_ou() -> ParentPage {
    ParentPage {
        parents: vec![ParentReference {
            id: SAMPLE_OU_ID.to_string(),
            parent_type: ParentType::OrganizationalUnit,
        }],
        next_token: PaginationToken::new("fixture-cursor").ok(),
    }
}

/// Parent page with one ROOT-typed parent and a present cursor.
#[must_use]
pub fn sample_parent_page_root() -> ParentPage {
    ParentPage {
        parents: vec![ParentReference {
            id: SAMPLE_ROOT_ID.to_string(),
            parent_type: ParentType::Root,
        }],
        next_token: PaginationToken::new("fixture-cursor").ok(),
    }
}

/// One organizational unit's descriptive metadata.
#[must_use]
pub fn sample_organizational_unit() -> OrganizationalUnit {
    OrganizationalUnit {
        id: SAMPLE_OU_ID.to_string(),
        arn: format!(
            "arn:aws:organizations::{SAMPLE_MASTER_ACCOUNT_ID}:ou/{SAMPLE_ORG_ID}/{SAMPLE_OU_ID}"
        ),
        name: SAMPLE_OU_NAME.to_string(),
    }
}
