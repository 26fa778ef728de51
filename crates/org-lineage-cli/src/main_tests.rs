// crates/org-lineage-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument parsing, exit code mapping, and
//              command execution against fixture backends.
// Purpose: Ensure CLI behavior is stable without a live backend.
// Dependencies: org-lineage-cli main helpers, org-lineage-fixtures
// ============================================================================

//! ## Overview
//! Validates argument parsing, stable exit codes, and the rendering of
//! resolution and description output in both text and JSON modes.

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

// ============================================================================
// SECTION: Imports
// ============================================================================

use clap::Parser;
use org_lineage_core::OrgApiError;
use org_lineage_core::OrganizationClient;
use org_lineage_fixtures::FixtureOrganizations;
use org_lineage_fixtures::FixtureSet;
use org_lineage_fixtures::samples::SAMPLE_MASTER_ACCOUNT_ID;
use org_lineage_fixtures::samples::SAMPLE_OU_ID;
use org_lineage_fixtures::samples::SAMPLE_OU_NAME;
use org_lineage_fixtures::samples::SAMPLE_ROOT_ID;
use org_lineage_fixtures::samples::sample_organization;
use org_lineage_fixtures::samples::sample_organizational_unit;

use super::Cli;
use super::CliError;
use super::Commands;
use super::DescribeOuCommand;
use super::EXIT_FAILURE;
use super::EXIT_USAGE;
use super::ResolveCommand;
use super::execute;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn fixture_client() -> OrganizationClient<FixtureOrganizations> {
    let set = FixtureSet::new()
        .with_organization(sample_organization())
        .with_unit(sample_organizational_unit())
        .with_parent_chain(
            SAMPLE_MASTER_ACCOUNT_ID,
            &[(SAMPLE_OU_ID, SAMPLE_OU_NAME)],
            SAMPLE_ROOT_ID,
        );
    OrganizationClient::new(FixtureOrganizations::new(set))
}

// ============================================================================
// SECTION: Argument Parsing
// ============================================================================

#[test]
fn parse_accepts_resolve_with_global_flags() {
    let cli = Cli::try_parse_from(["org-lineage", "resolve", "111111111111", "--json"])
        .expect("parse resolve");
    assert!(cli.json);
    match cli.command {
        Some(Commands::Resolve(args)) => assert_eq!(args.child_id, "111111111111"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_rejects_resolve_without_child() {
    assert!(Cli::try_parse_from(["org-lineage", "resolve"]).is_err());
}

#[test]
fn parse_accepts_version_flag_alone() {
    let cli = Cli::try_parse_from(["org-lineage", "--version"]).expect("parse version");
    assert!(cli.show_version);
    assert!(cli.command.is_none());
}

#[test]
fn parse_accepts_config_path() {
    let cli = Cli::try_parse_from(["org-lineage", "--config", "lineage.toml", "describe-org"])
        .expect("parse config path");
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("lineage.toml")));
}

// ============================================================================
// SECTION: Exit Codes
// ============================================================================

#[test]
fn usage_errors_exit_with_code_two() {
    let error = CliError::Usage("bad id".to_string());
    assert_eq!(error.exit_code(), EXIT_USAGE);
}

#[test]
fn backend_errors_exit_with_code_one() {
    let error = CliError::Backend(OrgApiError::Throttled);
    assert_eq!(error.exit_code(), EXIT_FAILURE);
}

// ============================================================================
// SECTION: Command Execution
// ============================================================================

#[test]
fn resolve_renders_text_path() {
    let command = Commands::Resolve(ResolveCommand {
        child_id: SAMPLE_MASTER_ACCOUNT_ID.to_string(),
    });
    let output = execute(&command, fixture_client(), 32, false).expect("resolve");
    let expected =
        format!("ORGANIZATIONAL_UNIT {SAMPLE_OU_ID} {SAMPLE_OU_NAME}\nROOT {SAMPLE_ROOT_ID}");
    assert_eq!(output, expected);
}

#[test]
fn resolve_renders_json_path() {
    let command = Commands::Resolve(ResolveCommand {
        child_id: SAMPLE_MASTER_ACCOUNT_ID.to_string(),
    });
    let output = execute(&command, fixture_client(), 32, true).expect("resolve");
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(value[0]["Type"], "ORGANIZATIONAL_UNIT");
    assert_eq!(value[0]["Name"], SAMPLE_OU_NAME);
    assert_eq!(value[1]["Type"], "ROOT");
}

#[test]
fn resolve_rejects_malformed_child_id() {
    let command = Commands::Resolve(ResolveCommand {
        child_id: "not-an-id".to_string(),
    });
    let error = execute(&command, fixture_client(), 32, false).expect_err("must reject");
    assert_eq!(error.exit_code(), EXIT_USAGE);
}

#[test]
fn describe_org_renders_text_fields() {
    let output = execute(&Commands::DescribeOrg, fixture_client(), 32, false).expect("describe");
    assert!(output.contains("FeatureSet ALL"));
    assert!(output.contains(&format!("MasterAccountId {SAMPLE_MASTER_ACCOUNT_ID}")));
    assert!(output.contains("SERVICE_CONTROL_POLICY=ENABLED"));
}

#[test]
fn describe_org_renders_wire_exact_json() {
    let output = execute(&Commands::DescribeOrg, fixture_client(), 32, true).expect("describe");
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(value["FeatureSet"], "ALL");
    assert_eq!(value["MasterAccountId"], SAMPLE_MASTER_ACCOUNT_ID);
}

#[test]
fn describe_ou_renders_name() {
    let command = Commands::DescribeOu(DescribeOuCommand {
        ou_id: SAMPLE_OU_ID.to_string(),
    });
    let output = execute(&command, fixture_client(), 32, false).expect("describe");
    assert!(output.contains(&format!("Name {SAMPLE_OU_NAME}")));
}

#[test]
fn describe_ou_rejects_malformed_id() {
    let command = Commands::DescribeOu(DescribeOuCommand {
        ou_id: "r-k9s7".to_string(),
    });
    let error = execute(&command, fixture_client(), 32, false).expect_err("must reject");
    assert_eq!(error.exit_code(), EXIT_USAGE);
}
