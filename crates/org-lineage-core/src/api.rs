// crates/org-lineage-core/src/api.rs
// ============================================================================
// Module: Organizations API Interface
// Description: Backend-agnostic interface for the organizations service.
// Purpose: Define the contract surface shared by live and fixture backends.
// Dependencies: crate::identifiers, crate::model, thiserror
// ============================================================================

//! ## Overview
//! The [`OrganizationsApi`] trait is the page-level seam between the
//! resolver stack and any backend. The live SDK adapter and the fixture
//! adapter both implement it; consumers depend on the trait only and select
//! the backend by injection at construction. Errors follow a stable taxonomy
//! so callers can distinguish retryable faults from contract breaks.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::identifiers::ChildId;
use crate::identifiers::OuId;
use crate::identifiers::PaginationToken;
use crate::model::Organization;
use crate::model::OrganizationalUnit;
use crate::model::ParentPage;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Organizations API errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Only [`OrgApiError::Throttled`] and [`OrgApiError::Transport`] are
///   retryable; everything else indicates a structural problem the caller
///   must resolve.
#[derive(Debug, Error)]
pub enum OrgApiError {
    /// Calling identity lacks permission or is not an organization member.
    #[error("access denied by the organizations service: {0}")]
    AccessDenied(String),
    /// Requested entity does not exist or was deleted concurrently.
    #[error("entity not found: {id}")]
    NotFound {
        /// Identifier that failed the lookup.
        id: String,
    },
    /// Request was throttled by the service.
    #[error("request throttled by the organizations service")]
    Throttled,
    /// Network-level failure (connect, timeout, malformed transport).
    #[error("transport failure: {0}")]
    Transport(String),
    /// Response violated the wire contract.
    #[error("malformed provider response: {0}")]
    Malformed(String),
    /// Pagination cursor chain exceeded the page bound.
    #[error("pagination cursor chain exceeded {max_pages} pages")]
    RunawayPagination {
        /// Configured page bound.
        max_pages: usize,
    },
}

impl OrgApiError {
    /// Returns true when a bounded retry may recover the call.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Throttled | Self::Transport(_))
    }
}

// ============================================================================
// SECTION: Organizations API
// ============================================================================

/// Backend-agnostic, page-level organizations interface.
///
/// Implementations are stateless between calls apart from connection
/// handles, so one instance is safely shared across concurrent resolutions
/// of distinct children.
pub trait OrganizationsApi: Send + Sync {
    /// Returns the organization's static metadata.
    ///
    /// # Errors
    ///
    /// Returns [`OrgApiError::AccessDenied`] when the calling identity lacks
    /// permission or is not a member of an organization.
    fn describe_organization(&self) -> Result<Organization, OrgApiError>;

    /// Returns one page of immediate parents for the child.
    ///
    /// `cursor` carries the token from the previous page, when any. Callers
    /// wanting the full parent list should go through
    /// [`OrganizationClient::list_parents`](crate::client::OrganizationClient::list_parents),
    /// which drains cursors and never surfaces them.
    ///
    /// # Errors
    ///
    /// Returns [`OrgApiError::NotFound`] when the child id is unknown.
    fn list_parents_page(
        &self,
        child: &ChildId,
        cursor: Option<&PaginationToken>,
    ) -> Result<ParentPage, OrgApiError>;

    /// Resolves an organizational unit id to its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`OrgApiError::NotFound`] when the id is unknown or was
    /// deleted concurrently.
    fn describe_organizational_unit(&self, ou: &OuId) -> Result<OrganizationalUnit, OrgApiError>;
}

impl<T: OrganizationsApi + ?Sized> OrganizationsApi for std::sync::Arc<T> {
    fn describe_organization(&self) -> Result<Organization, OrgApiError> {
        (**self).describe_organization()
    }

    fn list_parents_page(
        &self,
        child: &ChildId,
        cursor: Option<&PaginationToken>,
    ) -> Result<ParentPage, OrgApiError> {
        (**self).list_parents_page(child, cursor)
    }

    fn describe_organizational_unit(&self, ou: &OuId) -> Result<OrganizationalUnit, OrgApiError> {
        (**self).describe_organizational_unit(ou)
    }
}

impl<T: OrganizationsApi + ?Sized> OrganizationsApi for Box<T> {
    fn describe_organization(&self) -> Result<Organization, OrgApiError> {
        (**self).describe_organization()
    }

    fn list_parents_page(
        &self,
        child: &ChildId,
        cursor: Option<&PaginationToken>,
    ) -> Result<ParentPage, OrgApiError> {
        (**self).list_parents_page(child, cursor)
    }

    fn describe_organizational_unit(&self, ou: &OuId) -> Result<OrganizationalUnit, OrgApiError> {
        (**self).describe_organizational_unit(ou)
    }
}
