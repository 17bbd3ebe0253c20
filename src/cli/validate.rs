//! Validation command for configuration query strings.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{resolve_policy, CliError, CliResult, PolicyArg};
use crate::constraints::{validate_configuration, Adjustment, Violation};
use crate::query::{self, QueryIssue};

/// Validate a configuration query string against its type's constraints
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Canonical configuration query string (as found in a share link)
    #[arg(short, long, value_name = "QUERY")]
    pub query: String,

    /// Validation policy override
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response of the validate command.
#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    violations: Vec<Violation>,
    adjustments: Vec<Adjustment>,
    query_issues: Vec<QueryIssue>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let policy = resolve_policy(self.policy);
        let parsed = query::parse(&self.query);
        let outcome = validate_configuration(&parsed.configuration, policy);

        let response = ValidationResponse {
            valid: outcome.report.is_valid(),
            violations: outcome.report.violations.clone(),
            adjustments: outcome.report.adjustments.clone(),
            query_issues: parsed.issues,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("failed to serialize JSON: {e}")))?
            );
        } else {
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }

            if !response.violations.is_empty() {
                println!("\nViolations:");
                for violation in &response.violations {
                    println!("  ✗ {violation}");
                }
            }
            if !response.adjustments.is_empty() {
                println!("\nAdjustments:");
                for adjustment in &response.adjustments {
                    println!("  ~ {adjustment}");
                }
            }
            if !response.query_issues.is_empty() {
                println!("\nDegraded query fields:");
                for issue in &response.query_issues {
                    println!("  ⚠ {issue}");
                }
            }
        }

        if !response.valid {
            return Err(CliError::validation("configuration violates constraints"));
        }
        Ok(())
    }
}
