// crates/org-lineage-core/src/model.rs
// ============================================================================
// Module: Org Lineage Data Model
// Description: Wire-exact response shapes for the organizations service.
// Purpose: Mirror the provider's field names and enum values bit-exact.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Response shapes for the three operations the resolver touches: describe
//! organization, list parents, and describe organizational unit. Field names
//! and enum values reproduce the provider API exactly so serialized values
//! interoperate with recorded responses and the live service.
//! Invariants:
//! - Values are read-only projections of external state; nothing mutates
//!   them after construction.
//! - `ParentPage.next_token` present means more results are pending.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::identifiers::PaginationToken;

// ============================================================================
// SECTION: Enums
// ============================================================================

/// Organization feature set.
///
/// # Invariants
/// - Wire values are stable for interoperability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureSet {
    /// All organization features are enabled.
    All,
    /// Consolidated billing only.
    ConsolidatedBilling,
}

impl FeatureSet {
    /// Returns the wire form of the feature set.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::ConsolidatedBilling => "CONSOLIDATED_BILLING",
        }
    }

    /// Parses the wire form of the feature set.
    #[must_use]
    pub fn parse_wire(value: &str) -> Option<Self> {
        match value {
            "ALL" => Some(Self::All),
            "CONSOLIDATED_BILLING" => Some(Self::ConsolidatedBilling),
            _ => None,
        }
    }
}

/// Policy type attachable within the organization.
///
/// # Invariants
/// - Wire values are stable for interoperability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyType {
    /// Service control policy.
    ServiceControlPolicy,
    /// Tag policy.
    TagPolicy,
    /// Backup policy.
    BackupPolicy,
    /// AI services opt-out policy.
    #[serde(rename = "AISERVICES_OPT_OUT_POLICY")]
    AiServicesOptOutPolicy,
}

impl PolicyType {
    /// Returns the wire form of the policy type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ServiceControlPolicy => "SERVICE_CONTROL_POLICY",
            Self::TagPolicy => "TAG_POLICY",
            Self::BackupPolicy => "BACKUP_POLICY",
            Self::AiServicesOptOutPolicy => "AISERVICES_OPT_OUT_POLICY",
        }
    }

    /// Parses the wire form of the policy type.
    #[must_use]
    pub fn parse_wire(value: &str) -> Option<Self> {
        match value {
            "SERVICE_CONTROL_POLICY" => Some(Self::ServiceControlPolicy),
            "TAG_POLICY" => Some(Self::TagPolicy),
            "BACKUP_POLICY" => Some(Self::BackupPolicy),
            "AISERVICES_OPT_OUT_POLICY" => Some(Self::AiServicesOptOutPolicy),
            _ => None,
        }
    }
}

/// Enablement status of a policy type.
///
/// # Invariants
/// - Wire values are stable for interoperability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyTypeStatus {
    /// Policy type is enabled.
    Enabled,
    /// Policy type enablement is pending.
    PendingEnable,
    /// Policy type disablement is pending.
    PendingDisable,
}

impl PolicyTypeStatus {
    /// Returns the wire form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "ENABLED",
            Self::PendingEnable => "PENDING_ENABLE",
            Self::PendingDisable => "PENDING_DISABLE",
        }
    }

    /// Parses the wire form of the status.
    #[must_use]
    pub fn parse_wire(value: &str) -> Option<Self> {
        match value {
            "ENABLED" => Some(Self::Enabled),
            "PENDING_ENABLE" => Some(Self::PendingEnable),
            "PENDING_DISABLE" => Some(Self::PendingDisable),
            _ => None,
        }
    }
}

/// Type of a parent reference returned by `ListParents`.
///
/// # Invariants
/// - Wire values are stable for interoperability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParentType {
    /// Parent is an organizational unit.
    OrganizationalUnit,
    /// Parent is the organization root.
    Root,
}

impl ParentType {
    /// Returns the wire form of the parent type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrganizationalUnit => "ORGANIZATIONAL_UNIT",
            Self::Root => "ROOT",
        }
    }

    /// Parses the wire form of the parent type.
    #[must_use]
    pub fn parse_wire(value: &str) -> Option<Self> {
        match value {
            "ORGANIZATIONAL_UNIT" => Some(Self::OrganizationalUnit),
            "ROOT" => Some(Self::Root),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Organization
// ============================================================================

/// Summary of one policy type available in the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyTypeSummary {
    /// Policy type.
    #[serde(rename = "Type")]
    pub policy_type: PolicyType,
    /// Enablement status.
    pub status: PolicyTypeStatus,
}

/// Organization metadata returned by `DescribeOrganization`.
///
/// # Invariants
/// - Singleton per cloud organization; immutable during a resolution run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Organization {
    /// Organization identifier.
    pub id: String,
    /// Organization ARN.
    pub arn: String,
    /// Enabled feature set.
    pub feature_set: FeatureSet,
    /// Management account ARN.
    pub master_account_arn: String,
    /// Management account identifier.
    pub master_account_id: String,
    /// Management account email.
    pub master_account_email: String,
    /// Policy types available in the organization.
    pub available_policy_types: Vec<PolicyTypeSummary>,
}

// ============================================================================
// SECTION: Parents
// ============================================================================

/// One upward edge in the hierarchy from a child entity.
///
/// # Invariants
/// - `id` carries the provider's raw identifier; callers validate it
///   against `parent_type` before traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParentReference {
    /// Parent identifier.
    pub id: String,
    /// Parent type.
    #[serde(rename = "Type")]
    pub parent_type: ParentType,
}

/// One page of a `ListParents` response.
///
/// # Invariants
/// - `next_token` present signals more results pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParentPage {
    /// Immediate parents of the queried child.
    pub parents: Vec<ParentReference>,
    /// Cursor for the next page, when more results remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<PaginationToken>,
}

// ============================================================================
// SECTION: Organizational Unit
// ============================================================================

/// Organizational unit metadata returned by `DescribeOrganizationalUnit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrganizationalUnit {
    /// Organizational unit identifier.
    pub id: String,
    /// Organizational unit ARN.
    pub arn: String,
    /// Display name.
    pub name: String,
}
