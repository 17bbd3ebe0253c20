//! Deployment configuration commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::common::{CliError, CliResult, PolicyArg};
use crate::config::AppConfig;
use crate::constraints::ValidationPolicy;

/// Show or change the deployment configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Config subcommand to execute
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Show the active configuration
    Show(ShowArgs),
    /// Set the validation policy
    SetPolicy(SetPolicyArgs),
}

/// Show the active configuration
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Set the validation policy
#[derive(Debug, Clone, Args)]
pub struct SetPolicyArgs {
    /// The policy to use for dimension violations
    #[arg(value_enum)]
    pub policy: PolicyArg,
}

/// JSON response of the show command.
#[derive(Debug, Serialize)]
struct ShowResponse {
    policy: ValidationPolicy,
    presets_path: Option<String>,
    config_file: String,
    exists: bool,
}

impl ConfigArgs {
    /// Execute the config command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::SetPolicy(args) => args.execute(),
        }
    }
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let config = AppConfig::load().map_err(|e| CliError::io(format!("{e:#}")))?;
        let response = ShowResponse {
            policy: config.policy,
            presets_path: config
                .presets_path
                .as_ref()
                .map(|p| p.display().to_string()),
            config_file: AppConfig::config_file()
                .map(|p| p.display().to_string())
                .map_err(|e| CliError::io(format!("{e:#}")))?,
            exists: AppConfig::exists(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("failed to serialize JSON: {e}")))?
            );
        } else {
            println!("policy:       {:?}", response.policy);
            println!(
                "presets path: {}",
                response.presets_path.as_deref().unwrap_or("(bundled)")
            );
            println!(
                "config file:  {} ({})",
                response.config_file,
                if response.exists { "present" } else { "not present" }
            );
        }
        Ok(())
    }
}

impl SetPolicyArgs {
    /// Execute the set-policy command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = AppConfig::load().map_err(|e| CliError::io(format!("{e:#}")))?;
        config.policy = self.policy.into();
        config.save().map_err(|e| CliError::io(format!("{e:#}")))?;
        println!("policy set to {:?}", config.policy);
        Ok(())
    }
}
