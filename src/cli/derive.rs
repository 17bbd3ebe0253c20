//! Layout derivation command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{resolve_policy, CliError, CliResult, PolicyArg};
use crate::layout::{AssetCatalog, SectionLayout};
use crate::models::Configuration;
use crate::query::QueryIssue;
use crate::store::ConfiguratorStore;
use crate::viewer::ViewerConfig;

/// Derive the section layout for a configuration query string
#[derive(Debug, Clone, Args)]
pub struct DeriveArgs {
    /// Canonical configuration query string (as found in a share link)
    #[arg(short, long, value_name = "QUERY")]
    pub query: String,

    /// Validation policy override
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Include viewer camera parameters in the output
    #[arg(long)]
    pub viewer: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response of the derive command.
#[derive(Debug, Serialize)]
struct DeriveResponse {
    configuration: Configuration,
    layout: SectionLayout,
    canonical_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    viewer: Option<ViewerConfig>,
    query_issues: Vec<QueryIssue>,
}

impl DeriveArgs {
    /// Execute the derive command
    pub fn execute(&self) -> CliResult<()> {
        let policy = resolve_policy(self.policy);
        let (store, issues) =
            ConfiguratorStore::from_query(&self.query, policy, AssetCatalog::standard())
                .map_err(|e| CliError::engine(e.to_string()))?;

        let response = DeriveResponse {
            configuration: store.configuration().clone(),
            layout: store.layout().clone(),
            canonical_query: store.query().to_string(),
            viewer: self
                .viewer
                .then(|| ViewerConfig::for_type(store.configuration().furniture_type)),
            query_issues: issues,
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
        println!(
            "{} · {} · {} · {}",
            config.furniture_type.label(),
            config.dimensions,
            config.color,
            config.price
        );
        println!("{} sections:", response.layout.derived_sections);
        for (idx, column) in response.layout.columns.iter().enumerate() {
            let side = column
                .door_opening_side
                .map_or(String::new(), |s| format!(", opens {s}"));
            println!(
                "  {}: {:.1} x {:.1} cm, {}{}",
                idx + 1,
                column.width,
                column.height,
                column.arrangement_image,
                side
            );
        }
        if let Some(viewer) = &response.viewer {
            println!(
                "camera: distance {:?}, azimuth {:?}, polar {:?}",
                viewer.camera_distance, viewer.azimuth, viewer.polar
            );
        }
        for issue in &response.query_issues {
            println!("⚠ {issue}");
        }
        Ok(())
    }
}
