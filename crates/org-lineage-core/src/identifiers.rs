// crates/org-lineage-core/src/identifiers.rs
// ============================================================================
// Module: Org Lineage Identifiers
// Description: Strongly typed identifiers for organizations, accounts, and
//              organizational units.
// Purpose: Enforce provider id grammar at construction boundaries.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! This module defines the identifier types used throughout Org Lineage.
//! Identifiers validate the provider's documented grammar at construction
//! and serialize as plain strings on the wire. A [`ChildId`] is anything the
//! `ListParents` operation accepts: an account or an organizational unit.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Number of digits in an account identifier.
pub const ACCOUNT_ID_DIGITS: usize = 12;
/// Maximum byte length accepted for a pagination token.
pub const MAX_PAGINATION_TOKEN_BYTES: usize = 4096;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Identifier validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// Account identifier failed the 12-digit grammar.
    #[error("account id must be exactly 12 ascii digits: {0}")]
    InvalidAccountId(String),
    /// Organizational unit identifier failed the `ou-` grammar.
    #[error("organizational unit id must match ou-<base>-<suffix>: {0}")]
    InvalidOuId(String),
    /// Root identifier failed the `r-` grammar.
    #[error("root id must match r-<suffix>: {0}")]
    InvalidRootId(String),
    /// Child identifier is neither an account nor an organizational unit.
    #[error("child id must be an account id or an organizational unit id: {0}")]
    InvalidChildId(String),
    /// Pagination token is empty or exceeds the size bound.
    #[error("pagination token must be non-empty and at most {max_bytes} bytes")]
    InvalidPaginationToken {
        /// Maximum accepted token size in bytes.
        max_bytes: usize,
    },
}

// ============================================================================
// SECTION: Account Identifier
// ============================================================================

/// Account identifier.
///
/// # Invariants
/// - Exactly twelve ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Creates an account identifier, validating the 12-digit grammar.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidAccountId`] when the grammar is violated.
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        let id = id.into();
        if id.len() == ACCOUNT_ID_DIGITS && id.bytes().all(|byte| byte.is_ascii_digit()) {
            Ok(Self(id))
        } else {
            Err(IdError::InvalidAccountId(id))
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for String {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// SECTION: Organizational Unit Identifier
// ============================================================================

/// Organizational unit identifier.
///
/// # Invariants
/// - Matches `ou-<base>-<suffix>` with lowercase alphanumeric segments,
///   base 4..=32 and suffix 8..=32 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OuId(String);

impl OuId {
    /// Creates an organizational unit identifier, validating the grammar.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidOuId`] when the grammar is violated.
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        let id = id.into();
        if is_valid_ou_id(&id) {
            Ok(Self(id))
        } else {
            Err(IdError::InvalidOuId(id))
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OuId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OuId> for String {
    fn from(value: OuId) -> Self {
        value.0
    }
}

impl fmt::Display for OuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates the `ou-<base>-<suffix>` grammar.
fn is_valid_ou_id(id: &str) -> bool {
    let Some(rest) = id.strip_prefix("ou-") else {
        return false;
    };
    let Some((base, suffix)) = rest.split_once('-') else {
        return false;
    };
    is_lower_alnum(base, 4, 32) && is_lower_alnum(suffix, 8, 32)
}

/// Returns true when the segment is lowercase alphanumeric within bounds.
fn is_lower_alnum(segment: &str, min_len: usize, max_len: usize) -> bool {
    segment.len() >= min_len
        && segment.len() <= max_len
        && segment.bytes().all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit())
}

// ============================================================================
// SECTION: Root Identifier
// ============================================================================

/// Root identifier for the top-level node of the organization tree.
///
/// # Invariants
/// - Matches `r-<suffix>` with a lowercase alphanumeric suffix of 4..=32
///   characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootId(String);

impl RootId {
    /// Creates a root identifier, validating the grammar.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidRootId`] when the grammar is violated.
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        let id = id.into();
        let valid = id.strip_prefix("r-").is_some_and(|suffix| is_lower_alnum(suffix, 4, 32));
        if valid {
            Ok(Self(id))
        } else {
            Err(IdError::InvalidRootId(id))
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RootId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RootId> for String {
    fn from(value: RootId) -> Self {
        value.0
    }
}

impl fmt::Display for RootId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// SECTION: Child Identifier
// ============================================================================

/// Identifier accepted by the `ListParents` operation.
///
/// # Invariants
/// - Holds either a validated account id or a validated organizational unit
///   id; roots have no parents and are not valid children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChildId {
    /// Account child.
    Account(AccountId),
    /// Organizational unit child.
    OrganizationalUnit(OuId),
}

impl ChildId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Account(id) => id.as_str(),
            Self::OrganizationalUnit(id) => id.as_str(),
        }
    }
}

impl From<AccountId> for ChildId {
    fn from(value: AccountId) -> Self {
        Self::Account(value)
    }
}

impl From<OuId> for ChildId {
    fn from(value: OuId) -> Self {
        Self::OrganizationalUnit(value)
    }
}

impl FromStr for ChildId {
    type Err = IdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.starts_with("ou-") {
            return OuId::new(value)
                .map(Self::OrganizationalUnit)
                .map_err(|_| IdError::InvalidChildId(value.to_string()));
        }
        AccountId::new(value)
            .map(Self::Account)
            .map_err(|_| IdError::InvalidChildId(value.to_string()))
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Pagination Token
// ============================================================================

/// Opaque pagination cursor returned by list operations.
///
/// # Invariants
/// - Non-empty and at most [`MAX_PAGINATION_TOKEN_BYTES`] bytes.
/// - Treated as opaque; no structure is assumed beyond the size bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaginationToken(String);

impl PaginationToken {
    /// Creates a pagination token, enforcing the size bound.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidPaginationToken`] when the token is empty
    /// or oversized.
    pub fn new(token: impl Into<String>) -> Result<Self, IdError> {
        let token = token.into();
        if token.is_empty() || token.len() > MAX_PAGINATION_TOKEN_BYTES {
            return Err(IdError::InvalidPaginationToken {
                max_bytes: MAX_PAGINATION_TOKEN_BYTES,
            });
        }
        Ok(Self(token))
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PaginationToken {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PaginationToken> for String {
    fn from(value: PaginationToken) -> Self {
        value.0
    }
}
