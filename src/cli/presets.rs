//! Ready-made preset inspection commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::config::AppConfig;
use crate::layout::{AssetCatalog, SectionLayout};
use crate::models::Configuration;
use crate::presets::PresetCatalog;

/// Inspect the ready-made product presets
#[derive(Debug, Clone, Args)]
pub struct PresetsArgs {
    /// Preset subcommand to execute
    #[command(subcommand)]
    pub command: PresetsCommand,
}

/// Preset subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PresetsCommand {
    /// List all presets
    List(ListArgs),
    /// Show one preset in full
    Show(ShowArgs),
}

/// List all presets
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Preset catalog file (defaults to the configured or bundled catalog)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show one preset in full
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Preset slug
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// Preset catalog file (defaults to the configured or bundled catalog)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One row of the list output.
#[derive(Debug, Serialize)]
struct PresetSummary {
    slug: String,
    name: String,
    furniture_type: String,
    sections: usize,
    price: String,
}

/// JSON response of the show command.
#[derive(Debug, Serialize)]
struct ShowResponse {
    configuration: Configuration,
    layout: SectionLayout,
}

fn load_catalog(file: Option<&PathBuf>) -> CliResult<PresetCatalog> {
    let assets = AssetCatalog::standard();
    let configured = AppConfig::load().ok().and_then(|c| c.presets_path);
    match file.cloned().or(configured) {
        Some(path) => PresetCatalog::load(&path, &assets).map_err(|e| CliError::io(format!("{e:#}"))),
        None => PresetCatalog::built_in(&assets).map_err(|e| CliError::engine(format!("{e:#}"))),
    }
}

impl PresetsArgs {
    /// Execute the presets command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            PresetsCommand::List(args) => args.execute(),
            PresetsCommand::Show(args) => args.execute(),
        }
    }
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog(self.file.as_ref())?;
        let summaries: Vec<PresetSummary> = catalog
            .iter()
            .map(|loaded| PresetSummary {
                slug: loaded.preset.slug.clone(),
                name: loaded.preset.name.clone(),
                furniture_type: loaded.preset.furniture_type.to_string(),
                sections: loaded.preset.columns.len(),
                price: loaded.preset.price.to_string(),
            })
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&summaries)
                    .map_err(|e| CliError::io(format!("failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        for summary in &summaries {
            println!(
                "{:<24} {:<24} {:<13} {:>2} sections  {}",
                summary.slug, summary.name, summary.furniture_type, summary.sections, summary.price
            );
        }
        Ok(())
    }
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog(self.file.as_ref())?;
        let loaded = catalog
            .get(&self.slug)
            .ok_or_else(|| CliError::usage(format!("no preset with slug '{}'", self.slug)))?;

        let response = ShowResponse {
            configuration: loaded.to_configuration(),
            layout: loaded.layout.clone(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        let config = &response.configuration;
        println!("{} — {}", loaded.preset.slug, loaded.preset.name);
        println!(
            "{} · {} · {} · {}",
            config.furniture_type.label(),
            config.dimensions,
            config.color,
            config.price
        );
        for (idx, column) in response.layout.columns.iter().enumerate() {
            println!(
                "  {}: {:.1} cm, {}",
                idx + 1,
                column.width,
                column.arrangement_image
            );
        }
        Ok(())
    }
}
