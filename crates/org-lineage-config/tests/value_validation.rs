//! Config value validation tests for org-lineage-config.
// crates/org-lineage-config/tests/value_validation.rs
// =============================================================================
// Module: Config Value Validation Tests
// Description: Validate field range checks and policy conversion.
// Purpose: Ensure every rejection names the offending field.
// =============================================================================

use std::time::Duration;

use org_lineage_config::ConfigError;
use org_lineage_config::LineageConfig;

type TestResult = Result<(), String>;

fn assert_rejects_field(config: &LineageConfig, field: &str) -> TestResult {
    match config.validate() {
        Err(ConfigError::Invalid { field: named, .. }) if named == field => Ok(()),
        Err(other) => Err(format!("expected rejection of {field}, got {other}")),
        Ok(()) => Err(format!("expected rejection of {field}")),
    }
}

#[test]
fn defaults_validate_cleanly() -> TestResult {
    LineageConfig::default().validate().map_err(|err| err.to_string())
}

#[test]
fn validate_rejects_zero_attempts() -> TestResult {
    let mut config = LineageConfig::default();
    config.retry.max_attempts = 0;
    assert_rejects_field(&config, "retry.max_attempts")
}

#[test]
fn validate_rejects_excessive_attempts() -> TestResult {
    let mut config = LineageConfig::default();
    config.retry.max_attempts = 11;
    assert_rejects_field(&config, "retry.max_attempts")
}

#[test]
fn validate_rejects_zero_base_delay() -> TestResult {
    let mut config = LineageConfig::default();
    config.retry.base_delay_ms = 0;
    assert_rejects_field(&config, "retry.base_delay_ms")
}

#[test]
fn validate_rejects_cap_below_base() -> TestResult {
    let mut config = LineageConfig::default();
    config.retry.base_delay_ms = 100;
    config.retry.max_delay_ms = 50;
    assert_rejects_field(&config, "retry.max_delay_ms")
}

#[test]
fn validate_rejects_zero_depth() -> TestResult {
    let mut config = LineageConfig::default();
    config.resolver.max_depth = 0;
    assert_rejects_field(&config, "resolver.max_depth")
}

#[test]
fn validate_rejects_excessive_depth() -> TestResult {
    let mut config = LineageConfig::default();
    config.resolver.max_depth = 65;
    assert_rejects_field(&config, "resolver.max_depth")
}

#[test]
fn retry_policy_carries_configured_values() -> TestResult {
    let mut config = LineageConfig::default();
    config.retry.max_attempts = 6;
    config.retry.base_delay_ms = 25;
    config.retry.max_delay_ms = 400;
    let policy = config.retry_policy();
    if policy.max_attempts != 6 {
        return Err("max_attempts not carried".to_string());
    }
    if policy.base_delay != Duration::from_millis(25) {
        return Err("base_delay not carried".to_string());
    }
    if policy.max_delay != Duration::from_millis(400) {
        return Err("max_delay not carried".to_string());
    }
    Ok(())
}
