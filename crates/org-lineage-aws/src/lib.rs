// crates/org-lineage-aws/src/lib.rs
// ============================================================================
// Module: Org Lineage AWS Adapter
// Description: Live organizations backend over the AWS SDK.
// Purpose: Implement the core API seam against the real service.
// Dependencies: aws-config, aws-sdk-organizations, org-lineage-core, tokio
// ============================================================================

//! ## Overview
//! [`AwsOrganizations`] implements [`org_lineage_core::OrganizationsApi`]
//! over `aws-sdk-organizations`. The async SDK is bridged behind the
//! blocking trait with an owned multi-thread runtime; credentials come from
//! the SDK default chain with optional region, endpoint, and profile
//! overrides. Service errors are classified by error code into the core
//! taxonomy so the resolver retries exactly what the service documents as
//! transient.
//! Invariants:
//! - Stateless between calls apart from the client handle.
//! - Missing response fields are malformed responses, never defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_sdk_organizations::Client;
use aws_sdk_organizations::error::ProvideErrorMetadata;
use aws_sdk_organizations::error::SdkError;
use aws_sdk_organizations::types;
use org_lineage_core::ChildId;
use org_lineage_core::FeatureSet;
use org_lineage_core::OrgApiError;
use org_lineage_core::Organization;
use org_lineage_core::OrganizationalUnit;
use org_lineage_core::OrganizationsApi;
use org_lineage_core::OuId;
use org_lineage_core::PaginationToken;
use org_lineage_core::ParentPage;
use org_lineage_core::ParentReference;
use org_lineage_core::ParentType;
use org_lineage_core::PolicyType;
use org_lineage_core::PolicyTypeStatus;
use org_lineage_core::PolicyTypeSummary;
use serde::Deserialize;
use tokio::runtime::Runtime;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the live adapter.
///
/// # Invariants
/// - Absent fields fall back to the SDK default chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AwsOrganizationsConfig {
    /// AWS region override.
    #[serde(default)]
    pub region: Option<String>,
    /// Custom endpoint URL (for testing against local stacks).
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Named credentials profile.
    #[serde(default)]
    pub profile: Option<String>,
}

// ============================================================================
// SECTION: Adapter
// ============================================================================

/// Live organizations backend over the AWS SDK.
///
/// # Invariants
/// - Owns its runtime; dropping the adapter tears the runtime down off the
///   current thread.
pub struct AwsOrganizations {
    /// Organizations client handle.
    client: Client,
    /// Tokio runtime bridging the async SDK behind the blocking trait.
    runtime: Option<Arc<Runtime>>,
}

impl Drop for AwsOrganizations {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            let _ = std::thread::spawn(move || drop(runtime));
        }
    }
}

impl AwsOrganizations {
    /// Creates a live adapter from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OrgApiError::Transport`] when the runtime cannot be built.
    pub fn new(config: &AwsOrganizationsConfig) -> Result<Self, OrgApiError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|err| OrgApiError::Transport(err.to_string()))?;
        let shared_config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(region) = &config.region {
                loader = loader.region(Region::new(region.clone()));
            }
            if let Some(endpoint) = &config.endpoint {
                loader = loader.endpoint_url(endpoint);
            }
            if let Some(profile) = &config.profile {
                loader = loader.profile_name(profile);
            }
            loader.load().await
        });
        let client = Client::new(&shared_config);
        Ok(Self {
            client,
            runtime: Some(Arc::new(runtime)),
        })
    }

    /// Runs a future on the owned runtime.
    fn block_on<F: Future>(&self, future: F) -> Result<F::Output, OrgApiError> {
        self.runtime
            .as_ref()
            .map(|runtime| runtime.block_on(future))
            .ok_or_else(|| OrgApiError::Transport("adapter runtime unavailable".to_string()))
    }
}

impl OrganizationsApi for AwsOrganizations {
    fn describe_organization(&self) -> Result<Organization, OrgApiError> {
        let result = self.block_on(self.client.describe_organization().send())?;
        let output =
            result.map_err(|err| map_sdk_error(err, "the organization"))?;
        let organization = output
            .organization()
            .ok_or_else(|| OrgApiError::Malformed("response missing Organization".to_string()))?;
        convert_organization(organization)
    }

    fn list_parents_page(
        &self,
        child: &ChildId,
        cursor: Option<&PaginationToken>,
    ) -> Result<ParentPage, OrgApiError> {
        let request = self
            .client
            .list_parents()
            .child_id(child.as_str())
            .set_next_token(cursor.map(|token| token.as_str().to_string()));
        let result = self.block_on(request.send())?;
        let output = result.map_err(|err| map_sdk_error(err, child.as_str()))?;
        let parents = output
            .parents()
            .iter()
            .map(convert_parent)
            .collect::<Result<Vec<_>, _>>()?;
        let next_token = match output.next_token() {
            Some(token) => Some(
                PaginationToken::new(token)
                    .map_err(|err| OrgApiError::Malformed(err.to_string()))?,
            ),
            None => None,
        };
        Ok(ParentPage {
            parents,
            next_token,
        })
    }

    fn describe_organizational_unit(&self, ou: &OuId) -> Result<OrganizationalUnit, OrgApiError> {
        let request =
            self.client.describe_organizational_unit().organizational_unit_id(ou.as_str());
        let result = self.block_on(request.send())?;
        let output = result.map_err(|err| map_sdk_error(err, ou.as_str()))?;
        let unit = output.organizational_unit().ok_or_else(|| {
            OrgApiError::Malformed("response missing OrganizationalUnit".to_string())
        })?;
        Ok(OrganizationalUnit {
            id: required_field(unit.id(), "OrganizationalUnit.Id")?,
            arn: required_field(unit.arn(), "OrganizationalUnit.Arn")?,
            name: required_field(unit.name(), "OrganizationalUnit.Name")?,
        })
    }
}

// ============================================================================
// SECTION: Response Conversion
// ============================================================================

/// Returns the field value or a malformed-response error naming it.
fn required_field(value: Option<&str>, field: &str) -> Result<String, OrgApiError> {
    value
        .map(ToString::to_string)
        .ok_or_else(|| OrgApiError::Malformed(format!("response missing {field}")))
}

/// Converts the SDK organization into the wire-exact model.
fn convert_organization(organization: &types::Organization) -> Result<Organization, OrgApiError> {
    let feature_set_label = organization
        .feature_set()
        .map(types::OrganizationFeatureSet::as_str)
        .ok_or_else(|| OrgApiError::Malformed("response missing Organization.FeatureSet".to_string()))?;
    let feature_set = FeatureSet::parse_wire(feature_set_label).ok_or_else(|| {
        OrgApiError::Malformed(format!("unknown feature set: {feature_set_label}"))
    })?;
    let available_policy_types = organization
        .available_policy_types()
        .iter()
        .map(convert_policy_type_summary)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Organization {
        id: required_field(organization.id(), "Organization.Id")?,
        arn: required_field(organization.arn(), "Organization.Arn")?,
        feature_set,
        master_account_arn: required_field(
            organization.master_account_arn(),
            "Organization.MasterAccountArn",
        )?,
        master_account_id: required_field(
            organization.master_account_id(),
            "Organization.MasterAccountId",
        )?,
        master_account_email: required_field(
            organization.master_account_email(),
            "Organization.MasterAccountEmail",
        )?,
        available_policy_types,
    })
}

/// Converts one SDK policy type summary.
fn convert_policy_type_summary(
    summary: &types::PolicyTypeSummary,
) -> Result<PolicyTypeSummary, OrgApiError> {
    let type_label = summary
        .r#type()
        .map(types::PolicyType::as_str)
        .ok_or_else(|| OrgApiError::Malformed("policy type summary missing Type".to_string()))?;
    let status_label = summary
        .status()
        .map(types::PolicyTypeStatus::as_str)
        .ok_or_else(|| OrgApiError::Malformed("policy type summary missing Status".to_string()))?;
    let policy_type = PolicyType::parse_wire(type_label)
        .ok_or_else(|| OrgApiError::Malformed(format!("unknown policy type: {type_label}")))?;
    let status = PolicyTypeStatus::parse_wire(status_label).ok_or_else(|| {
        OrgApiError::Malformed(format!("unknown policy type status: {status_label}"))
    })?;
    Ok(PolicyTypeSummary {
        policy_type,
        status,
    })
}

/// Converts one SDK parent reference.
fn convert_parent(parent: &types::Parent) -> Result<ParentReference, OrgApiError> {
    let type_label = parent
        .r#type()
        .map(types::ParentType::as_str)
        .ok_or_else(|| OrgApiError::Malformed("parent missing Type".to_string()))?;
    let parent_type = ParentType::parse_wire(type_label)
        .ok_or_else(|| OrgApiError::Malformed(format!("unknown parent type: {type_label}")))?;
    Ok(ParentReference {
        id: required_field(parent.id(), "Parent.Id")?,
        parent_type,
    })
}

// ============================================================================
// SECTION: Error Classification
// ============================================================================

/// Maps an SDK error into the core taxonomy.
///
/// Service errors classify by error code; everything before a service
/// response is a transport fault and therefore retryable.
fn map_sdk_error<E, R>(error: SdkError<E, R>, requested_id: &str) -> OrgApiError
where
    E: ProvideErrorMetadata,
{
    match error {
        SdkError::ServiceError(context) => {
            let err = context.err();
            classify_service_error(err.code(), err.message(), requested_id)
        }
        SdkError::TimeoutError(_) => OrgApiError::Transport("request timed out".to_string()),
        SdkError::DispatchFailure(_) => {
            OrgApiError::Transport("request dispatch failed".to_string())
        }
        SdkError::ResponseError(_) => {
            OrgApiError::Transport("invalid transport response".to_string())
        }
        SdkError::ConstructionFailure(_) => {
            OrgApiError::Malformed("request construction failed".to_string())
        }
        _ => OrgApiError::Transport("unclassified sdk failure".to_string()),
    }
}

/// Classifies a service error code into the core taxonomy.
fn classify_service_error(
    code: Option<&str>,
    message: Option<&str>,
    requested_id: &str,
) -> OrgApiError {
    let detail = || {
        message
            .map_or_else(|| code.unwrap_or("unknown service error").to_string(), ToString::to_string)
    };
    match code {
        Some("AccessDeniedException" | "AWSOrganizationsNotInUseException") => {
            OrgApiError::AccessDenied(detail())
        }
        Some(
            "ChildNotFoundException"
            | "ParentNotFoundException"
            | "OrganizationalUnitNotFoundException"
            | "TargetNotFoundException",
        ) => OrgApiError::NotFound {
            id: requested_id.to_string(),
        },
        Some("TooManyRequestsException") => OrgApiError::Throttled,
        // Documented as a transient server fault.
        Some("ServiceException") => OrgApiError::Transport(detail()),
        _ => OrgApiError::Malformed(detail()),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
