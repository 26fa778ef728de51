// crates/org-lineage-config/src/lib.rs
// ============================================================================
// Module: Org Lineage Config
// Description: Canonical configuration model, loading, and validation.
// Purpose: Keep config input handling strict and fail-closed.
// Dependencies: org-lineage-aws, org-lineage-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! TOML configuration for the resolver stack: the `[aws]` section feeds the
//! live adapter, `[retry]` the client's backoff policy, and `[resolver]` the
//! walk depth bound. Loading guards the path, file size, and encoding before
//! parsing; validation attributes every rejection to the offending field.
//! Unknown fields are rejected so typos fail loudly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::time::Duration;

use org_lineage_aws::AwsOrganizationsConfig;
use org_lineage_core::RetryPolicy;
use org_lineage_core::retry::DEFAULT_BASE_DELAY;
use org_lineage_core::retry::DEFAULT_MAX_ATTEMPTS;
use org_lineage_core::retry::DEFAULT_MAX_DELAY;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum accepted config file size in bytes.
pub const MAX_CONFIG_BYTES: usize = 1024 * 1024;
/// Maximum accepted config path length in bytes.
const MAX_PATH_BYTES: usize = 4096;
/// Maximum accepted length of a single path component.
const MAX_PATH_COMPONENT_BYTES: usize = 255;
/// Highest permitted retry attempt budget.
const MAX_RETRY_ATTEMPTS: u32 = 10;
/// Highest permitted base delay in milliseconds.
const MAX_BASE_DELAY_MS: u64 = 10_000;
/// Highest permitted resolution depth.
const MAX_DEPTH: usize = 64;
/// Default resolution depth, matching the resolver's bound.
const DEFAULT_MAX_DEPTH: usize = 32;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Path exceeds the accepted length.
    #[error("config path exceeds max length")]
    PathTooLong,
    /// One path component exceeds the accepted length.
    #[error("config path component too long")]
    PathComponentTooLong,
    /// File could not be read.
    #[error("config io error: {0}")]
    Io(String),
    /// File exceeds the size cap.
    #[error("config file exceeds size limit")]
    FileTooLarge,
    /// File is not valid UTF-8.
    #[error("config file must be utf-8")]
    NotUtf8,
    /// File is not valid TOML for the model.
    #[error("config parse error: {0}")]
    Parse(String),
    /// A field value is out of range.
    #[error("invalid config: {field}: {reason}")]
    Invalid {
        /// Offending field path.
        field: &'static str,
        /// Rejection reason.
        reason: String,
    },
}

// ============================================================================
// SECTION: Sections
// ============================================================================

/// Retry policy section.
///
/// # Invariants
/// - `max_attempts` within 1..=10; delays positive; cap at least the base.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetrySection {
    /// Attempts per call, including the initial call.
    pub max_attempts: u32,
    /// Delay before the first retry, in milliseconds.
    pub base_delay_ms: u64,
    /// Cap on any single retry delay, in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetrySection {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay_ms: u64::try_from(DEFAULT_BASE_DELAY.as_millis()).unwrap_or(50),
            max_delay_ms: u64::try_from(DEFAULT_MAX_DELAY.as_millis()).unwrap_or(2_000),
        }
    }
}

/// Resolver section.
///
/// # Invariants
/// - `max_depth` within 1..=64.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverSection {
    /// Maximum hops from a child to the root.
    pub max_depth: usize,
}

impl Default for ResolverSection {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineageConfig {
    /// Live adapter settings.
    pub aws: AwsOrganizationsConfig,
    /// Retry policy settings.
    pub retry: RetrySection,
    /// Resolver settings.
    pub resolver: ResolverSection,
}

impl LineageConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the path, size, encoding, syntax, or a
    /// field value is rejected.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        validate_path(path)?;
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_BYTES {
            return Err(ConfigError::FileTooLarge);
        }
        let text = String::from_utf8(bytes).map_err(|_| ConfigError::NotUtf8)?;
        let config: Self =
            toml::from_str(&text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all field ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry.max_attempts == 0 || self.retry.max_attempts > MAX_RETRY_ATTEMPTS {
            return Err(ConfigError::Invalid {
                field: "retry.max_attempts",
                reason: format!("must be within 1..={MAX_RETRY_ATTEMPTS}"),
            });
        }
        if self.retry.base_delay_ms == 0 || self.retry.base_delay_ms > MAX_BASE_DELAY_MS {
            return Err(ConfigError::Invalid {
                field: "retry.base_delay_ms",
                reason: format!("must be within 1..={MAX_BASE_DELAY_MS}"),
            });
        }
        if self.retry.max_delay_ms < self.retry.base_delay_ms {
            return Err(ConfigError::Invalid {
                field: "retry.max_delay_ms",
                reason: "must be at least base_delay_ms".to_string(),
            });
        }
        if self.resolver.max_depth == 0 || self.resolver.max_depth > MAX_DEPTH {
            return Err(ConfigError::Invalid {
                field: "resolver.max_depth",
                reason: format!("must be within 1..={MAX_DEPTH}"),
            });
        }
        Ok(())
    }

    /// Returns the retry policy for the client adapter.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.retry.max_attempts,
            base_delay: Duration::from_millis(self.retry.base_delay_ms),
            max_delay: Duration::from_millis(self.retry.max_delay_ms),
        }
    }
}

// ============================================================================
// SECTION: Path Guards
// ============================================================================

/// Rejects oversized paths before any filesystem access.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_PATH_BYTES {
        return Err(ConfigError::PathTooLong);
    }
    for component in path.components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_BYTES {
            return Err(ConfigError::PathComponentTooLong);
        }
    }
    Ok(())
}
