// crates/org-lineage-cli/src/main.rs
// ============================================================================
// Module: Org Lineage CLI Entry Point
// Description: Command dispatcher for hierarchy resolution workflows.
// Purpose: Resolve child ancestry and inspect organization metadata from the
//          command line against the live backend.
// Dependencies: clap, org-lineage-aws, org-lineage-config, org-lineage-core,
//               org-lineage-resolver, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Front end over the resolver stack. Commands load optional TOML
//! configuration, build the live adapter, and print results as plain text or
//! JSON. Exit codes are stable: 0 on success, 1 when the backend or the
//! resolution fails, 2 on usage and configuration errors.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use org_lineage_aws::AwsOrganizations;
use org_lineage_config::ConfigError;
use org_lineage_config::LineageConfig;
use org_lineage_core::ChildId;
use org_lineage_core::OrgApiError;
use org_lineage_core::OrganizationClient;
use org_lineage_core::OrganizationsApi;
use org_lineage_core::Organization;
use org_lineage_core::OrganizationalUnit;
use org_lineage_core::OuId;
use org_lineage_resolver::AncestorStep;
use org_lineage_resolver::HierarchyResolver;
use org_lineage_resolver::ResolveError;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "org-lineage", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Optional configuration file path.
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Emit machine-readable JSON instead of plain text.
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    json: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the ancestry chain of an account or organizational unit.
    Resolve(ResolveCommand),
    /// Describe the organization.
    DescribeOrg,
    /// Describe one organizational unit.
    DescribeOu(DescribeOuCommand),
}

/// Arguments for ancestry resolution.
#[derive(Args, Debug)]
struct ResolveCommand {
    /// Account id (12 digits) or organizational unit id (`ou-...`).
    #[arg(value_name = "CHILD_ID")]
    child_id: String,
}

/// Arguments for organizational unit description.
#[derive(Args, Debug)]
struct DescribeOuCommand {
    /// Organizational unit id (`ou-...`).
    #[arg(value_name = "OU_ID")]
    ou_id: String,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI errors mapped onto stable exit codes.
///
/// # Invariants
/// - Usage and configuration problems exit 2; backend and resolution
///   failures exit 1.
#[derive(Debug, Error)]
enum CliError {
    /// Malformed command input.
    #[error("usage error: {0}")]
    Usage(String),
    /// Configuration loading or validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Backend call failed outside a resolution walk.
    #[error(transparent)]
    Backend(#[from] OrgApiError),
    /// Ancestry resolution failed.
    #[error(transparent)]
    Resolution(#[from] ResolveError),
    /// Output could not be encoded or written.
    #[error("output error: {0}")]
    Output(String),
}

/// Exit code for backend and resolution failures.
const EXIT_FAILURE: u8 = 1;
/// Exit code for usage and configuration errors.
const EXIT_USAGE: u8 = 2;

impl CliError {
    /// Returns the process exit code for this error.
    const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) | Self::Config(_) => EXIT_USAGE,
            Self::Backend(_) | Self::Resolution(_) | Self::Output(_) => EXIT_FAILURE,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            let _ = write_stderr_line(&format!("error: {err}"));
            ExitCode::from(err.exit_code())
        }
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("org-lineage {version}"))
            .map_err(|err| CliError::Output(err.to_string()))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help().map_err(|err| CliError::Output(err.to_string()))?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = match cli.config {
        Some(path) => LineageConfig::load(&path)?,
        None => LineageConfig::default(),
    };

    let backend = AwsOrganizations::new(&config.aws)?;
    let client = OrganizationClient::new(backend).with_retry_policy(config.retry_policy());
    let output = execute(&command, client, config.resolver.max_depth, cli.json)?;
    write_stdout_line(&output).map_err(|err| CliError::Output(err.to_string()))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Command Execution
// ============================================================================

/// Runs one command against the backend and renders its output.
fn execute<A: OrganizationsApi>(
    command: &Commands,
    client: OrganizationClient<A>,
    max_depth: usize,
    json: bool,
) -> CliResult<String> {
    match command {
        Commands::Resolve(args) => {
            let child = ChildId::from_str(&args.child_id)
                .map_err(|err| CliError::Usage(err.to_string()))?;
            let resolver = HierarchyResolver::new(client).with_max_depth(max_depth);
            let path = resolver.resolve(&child)?;
            if json {
                encode_json(&path)
            } else {
                Ok(render_path(path.steps()))
            }
        }
        Commands::DescribeOrg => {
            let organization = client.describe_organization()?;
            if json {
                encode_json(&organization)
            } else {
                Ok(render_organization(&organization))
            }
        }
        Commands::DescribeOu(args) => {
            let ou =
                OuId::new(args.ou_id.clone()).map_err(|err| CliError::Usage(err.to_string()))?;
            let unit = client.describe_organizational_unit(&ou)?;
            if json {
                encode_json(&unit)
            } else {
                Ok(render_unit(&unit))
            }
        }
    }
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Encodes a value as a single JSON line.
fn encode_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string(value).map_err(|err| CliError::Output(err.to_string()))
}

/// Renders an ancestry chain, one step per line, leaf side first.
fn render_path(steps: &[AncestorStep]) -> String {
    let lines: Vec<String> = steps
        .iter()
        .map(|step| match step {
            AncestorStep::OrganizationalUnit {
                id,
                name,
            } => format!("ORGANIZATIONAL_UNIT {} {name}", id.as_str()),
            AncestorStep::Root {
                id,
            } => format!("ROOT {}", id.as_str()),
        })
        .collect();
    lines.join("\n")
}

/// Renders organization metadata as key-value lines.
fn render_organization(organization: &Organization) -> String {
    let policy_types: Vec<String> = organization
        .available_policy_types
        .iter()
        .map(|summary| format!("{}={}", summary.policy_type.as_str(), summary.status.as_str()))
        .collect();
    format!(
        "Id {}\nFeatureSet {}\nMasterAccountId {}\nMasterAccountEmail {}\nAvailablePolicyTypes {}",
        organization.id,
        organization.feature_set.as_str(),
        organization.master_account_id,
        organization.master_account_email,
        policy_types.join(",")
    )
}

/// Renders organizational unit metadata as key-value lines.
fn render_unit(unit: &OrganizationalUnit) -> String {
    format!("Id {}\nName {}\nArn {}", unit.id, unit.name, unit.arn)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}
