// crates/org-lineage-core/tests/wire_shapes.rs
// ============================================================================
// Module: Wire Shape Tests
// Description: Pin the provider's exact field names and enum values.
// Purpose: Keep serialized shapes interoperable with recorded responses.
// ============================================================================

//! ## Overview
//! These tests pin the serialized form of every shape the resolver touches
//! against JSON literals matching the provider's documented responses. A
//! rename or casing change in the model breaks interoperability and must
//! fail here.

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
use serde_json::json;

// ============================================================================
// SECTION: Organization
// ============================================================================

#[test]
fn organization_serializes_with_provider_field_names() {
    let organization = Organization {
        id: "o-k9s7p2q4x1".to_string(),
        arn: "arn:aws:organizations::111111111111:organization/o-k9s7p2q4x1".to_string(),
        feature_set: FeatureSet::All,
        master_account_arn: "arn:aws:organizations::111111111111:account/o-k9s7p2q4x1/111111111111"
            .to_string(),
        master_account_id: "111111111111".to_string(),
        master_account_email: "ops@example.com".to_string(),
        available_policy_types: vec![PolicyTypeSummary {
            policy_type: PolicyType::ServiceControlPolicy,
            status: PolicyTypeStatus::Enabled,
        }],
    };
    let value = serde_json::to_value(&organization).unwrap();
    assert_eq!(
        value,
        json!({
            "Id": "o-k9s7p2q4x1",
            "Arn": "arn:aws:organizations::111111111111:organization/o-k9s7p2q4x1",
            "FeatureSet": "ALL",
            "MasterAccountArn":
                "arn:aws:organizations::111111111111:account/o-k9s7p2q4x1/111111111111",
            "MasterAccountId": "111111111111",
            "MasterAccountEmail": "ops@example.com",
            "AvailablePolicyTypes": [
                {"Type": "SERVICE_CONTROL_POLICY", "Status": "ENABLED"}
            ]
        })
    );
}

#[test]
fn organization_round_trips_from_recorded_response() {
    let recorded = json!({
        "Id": "o-k9s7p2q4x1",
        "Arn": "arn:aws:organizations::111111111111:organization/o-k9s7p2q4x1",
        "FeatureSet": "CONSOLIDATED_BILLING",
        "MasterAccountArn": "arn",
        "MasterAccountId": "111111111111",
        "MasterAccountEmail": "ops@example.com",
        "AvailablePolicyTypes": []
    });
    let organization: Organization = serde_json::from_value(recorded).unwrap();
    assert_eq!(organization.feature_set, FeatureSet::ConsolidatedBilling);
    assert!(organization.available_policy_types.is_empty());
}

// ============================================================================
// SECTION: Parents
// ============================================================================

#[test]
fn parent_page_serializes_with_provider_field_names() {
    let page = ParentPage {
        parents: vec![ParentReference {
            id: "ou-k9s7-a1b2c3d4".to_string(),
            parent_type: ParentType::OrganizationalUnit,
        }],
        next_token: Some(PaginationToken::new("cursor-1").unwrap()),
    };
    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(
        value,
        json!({
            "Parents": [{"Id": "ou-k9s7-a1b2c3d4", "Type": "ORGANIZATIONAL_UNIT"}],
            "NextToken": "cursor-1"
        })
    );
}

#[test]
fn parent_page_omits_absent_next_token() {
    let page = ParentPage {
        parents: vec![ParentReference {
            id: "r-k9s7".to_string(),
            parent_type: ParentType::Root,
        }],
        next_token: None,
    };
    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(value, json!({"Parents": [{"Id": "r-k9s7", "Type": "ROOT"}]}));
}

#[test]
fn parent_page_deserializes_terminal_page_without_token() {
    let recorded = json!({"Parents": [{"Id": "r-k9s7", "Type": "ROOT"}]});
    let page: ParentPage = serde_json::from_value(recorded).unwrap();
    assert_eq!(page.parents.len(), 1);
    assert!(page.next_token.is_none());
}

// ============================================================================
// SECTION: Organizational Unit
// ============================================================================

#[test]
fn organizational_unit_serializes_with_provider_field_names() {
    let unit = OrganizationalUnit {
        id: "ou-k9s7-a1b2c3d4".to_string(),
        arn: "arn:aws:organizations::111111111111:ou/o-k9s7p2q4x1/ou-k9s7-a1b2c3d4".to_string(),
        name: "workloads".to_string(),
    };
    let value = serde_json::to_value(&unit).unwrap();
    assert_eq!(
        value,
        json!({
            "Id": "ou-k9s7-a1b2c3d4",
            "Arn": "arn:aws:organizations::111111111111:ou/o-k9s7p2q4x1/ou-k9s7-a1b2c3d4",
            "Name": "workloads"
        })
    );
}

// ============================================================================
// SECTION: Enum Wire Forms
// ============================================================================

#[test]
fn enum_wire_forms_parse_their_own_labels() {
    for feature_set in [FeatureSet::All, FeatureSet::ConsolidatedBilling] {
        assert_eq!(FeatureSet::parse_wire(feature_set.as_str()), Some(feature_set));
    }
    for parent_type in [ParentType::OrganizationalUnit, ParentType::Root] {
        assert_eq!(ParentType::parse_wire(parent_type.as_str()), Some(parent_type));
    }
    for status in [
        PolicyTypeStatus::Enabled,
        PolicyTypeStatus::PendingEnable,
        PolicyTypeStatus::PendingDisable,
    ] {
        assert_eq!(PolicyTypeStatus::parse_wire(status.as_str()), Some(status));
    }
    assert_eq!(PolicyType::parse_wire("SERVICE_CONTROL_POLICY"), Some(PolicyType::ServiceControlPolicy));
    assert_eq!(ParentType::parse_wire("ACCOUNT"), None);
}
