// crates/org-lineage-fixtures/src/lib.rs
// ============================================================================
// Module: Org Lineage Fixtures
// Description: Fixture-backed organizations backend for deterministic tests.
// Purpose: Swap for the live adapter without resolver changes.
// Dependencies: org-lineage-core
// ============================================================================

//! ## Overview
//! This crate implements [`org_lineage_core::OrganizationsApi`] from
//! explicitly constructed, immutable fixture values injected at
//! construction. Fixtures script full pagination chains (a first page with a
//! present cursor, then the terminal page) so consumers' drain loops are
//! exercised rather than just happy-path parsing, and script faults
//! (throttle runs, missing entities, zero-parent pages, repeating parents)
//! to drive retry, taxonomy, and cycle tests.
//! Invariants:
//! - Fixture values are never ambient; every adapter owns its own set.
//! - Cursor values handed out must be echoed back on the follow-up call.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod adapter;
pub mod samples;
pub mod sleeper;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use adapter::Fault;
pub use adapter::FixtureOrganizations;
pub use adapter::FixtureSet;
pub use adapter::ParentScript;
pub use adapter::UnitScript;
pub use samples::sample_organization;
pub use samples::sample_organizational_unit;
pub use samples::sample_parent_page_ou;
pub use samples::sample_parent_page_root;
pub use sleeper::RecordingSleeper;
