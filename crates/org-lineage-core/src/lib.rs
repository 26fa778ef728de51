// crates/org-lineage-core/src/lib.rs
// ============================================================================
// Module: Org Lineage Core
// Description: Data model, interfaces, and client adapter for organization
//              hierarchy resolution.
// Purpose: Define the contract surfaces shared by live and fixture backends.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! This crate defines the wire-exact data model for the organizations
//! service (organization metadata, parent references, organizational units),
//! strongly typed identifiers, the backend-agnostic [`OrganizationsApi`]
//! interface, and the [`OrganizationClient`] adapter that drains pagination
//! and applies bounded retries. Backends (live SDK or fixtures) are selected
//! by dependency injection; nothing in this crate branches on the backend.
//! Invariants:
//! - Wire shapes serialize with the provider's exact field names.
//! - Pagination cursors never escape the client adapter.
//! - Only throttling and transport faults are retried.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod api;
pub mod client;
pub mod identifiers;
pub mod model;
pub mod retry;
pub mod telemetry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use api::OrgApiError;
pub use api::OrganizationsApi;
pub use client::MAX_PARENT_PAGES;
pub use client::OrganizationClient;
pub use identifiers::AccountId;
pub use identifiers::ChildId;
pub use identifiers::IdError;
pub use identifiers::OuId;
pub use identifiers::PaginationToken;
pub use identifiers::RootId;
pub use model::FeatureSet;
pub use model::Organization;
pub use model::OrganizationalUnit;
pub use model::ParentPage;
pub use model::ParentReference;
pub use model::ParentType;
pub use model::PolicyType;
pub use model::PolicyTypeStatus;
pub use model::PolicyTypeSummary;
pub use retry::RetryPolicy;
pub use retry::Sleeper;
pub use retry::ThreadSleeper;
pub use telemetry::LineageTelemetry;
pub use telemetry::NoopTelemetry;
pub use telemetry::OrgCall;
pub use telemetry::RetryEvent;
