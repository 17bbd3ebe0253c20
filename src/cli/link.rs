//! Share-link encoding and decoding commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::models::{
    ColumnConfiguration, ColumnKind, Configuration, FinishColor, FurnitureType, OpeningType,
};
use crate::query::{self, QueryIssue};

/// Encode and decode shareable configuration links
#[derive(Debug, Clone, Args)]
pub struct LinkArgs {
    /// Link subcommand to execute
    #[command(subcommand)]
    pub command: LinkCommand,
}

/// Link subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum LinkCommand {
    /// Build a canonical query string from configuration values
    Encode(EncodeArgs),
    /// Parse a query string back into a configuration
    Decode(DecodeArgs),
}

/// Build a canonical query string from configuration values
#[derive(Debug, Clone, Args)]
pub struct EncodeArgs {
    /// Furniture type tag (e.g. "wardrobe")
    #[arg(long = "type", value_name = "TYPE")]
    pub furniture_type: String,

    /// Overall width in centimetres
    #[arg(short, long)]
    pub width: Option<f32>,

    /// Overall height in centimetres
    #[arg(long)]
    pub height: Option<f32>,

    /// Overall depth in centimetres
    #[arg(short, long)]
    pub depth: Option<f32>,

    /// Plinth height in centimetres
    #[arg(long)]
    pub plinth: Option<f32>,

    /// Finish tag (e.g. "oak")
    #[arg(long)]
    pub color: Option<String>,

    /// Opening style tag (e.g. "round-handle")
    #[arg(long)]
    pub opening: Option<String>,

    /// Column kind tags, left to right; also sets the section count
    #[arg(long = "column", value_name = "KIND")]
    pub columns: Vec<String>,
}

/// Parse a query string back into a configuration
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Canonical configuration query string
    #[arg(short, long, value_name = "QUERY")]
    pub query: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response of the decode command.
#[derive(Debug, Serialize)]
struct DecodeResponse {
    configuration: Configuration,
    canonical_query: String,
    query_issues: Vec<QueryIssue>,
}

impl LinkArgs {
    /// Execute the link command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            LinkCommand::Encode(args) => args.execute(),
            LinkCommand::Decode(args) => args.execute(),
        }
    }
}

impl EncodeArgs {
    /// Execute the encode command
    pub fn execute(&self) -> CliResult<()> {
        let furniture_type: FurnitureType = self
            .furniture_type
            .parse()
            .map_err(|e| CliError::usage(format!("{e}")))?;

        let mut config = Configuration::defaults_for(furniture_type);
        if let Some(width) = self.width {
            config.dimensions.width = width;
        }
        if let Some(height) = self.height {
            config.dimensions.height = height;
        }
        if let Some(depth) = self.depth {
            config.dimensions.depth = depth;
        }
        if let Some(plinth) = self.plinth {
            config.dimensions.plinth_height = plinth;
        }
        if let Some(color) = &self.color {
            config.color = color
                .parse::<FinishColor>()
                .map_err(|e| CliError::usage(format!("{e}")))?;
        }
        if let Some(opening) = &self.opening {
            config.options.opening = opening
                .parse::<OpeningType>()
                .map_err(|e| CliError::usage(format!("{e}")))?;
        }
        if !self.columns.is_empty() {
            let columns: Result<Vec<ColumnConfiguration>, CliError> = self
                .columns
                .iter()
                .map(|tag| {
                    tag.parse::<ColumnKind>()
                        .map(ColumnConfiguration::new)
                        .map_err(|e| CliError::usage(format!("{e}")))
                })
                .collect();
            config.columns = columns?;
            config.selected_sections = config.columns.len();
        }
        config.normalize_columns();

        println!("{}", query::serialize(&config));
        Ok(())
    }
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self) -> CliResult<()> {
        let parsed = query::parse(&self.query);
        let response = DecodeResponse {
            canonical_query: query::serialize(&parsed.configuration),
            configuration: parsed.configuration,
            query_issues: parsed.issues,
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
        println!("{} · {}", config.furniture_type.label(), config.dimensions);
        println!("finish: {}, opening: {}", config.color, config.options.opening);
        for (idx, column) in config.columns.iter().enumerate() {
            let side = column
                .door_opening_side
                .map_or(String::new(), |s| format!(" (opens {s})"));
            println!("  column {}: {}{}", idx + 1, column.kind, side);
        }
        for issue in &response.query_issues {
            println!("⚠ {issue}");
        }
        Ok(())
    }
}
