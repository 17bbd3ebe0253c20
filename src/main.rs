//! Furnish - parametric furniture configurator engine
//!
//! The binary provides headless access to the engine: validating
//! configurations, deriving layouts, encoding and decoding share links,
//! and inspecting the preset catalog.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use furnish::cli::{ConfigArgs, DeriveArgs, DoctorArgs, LinkArgs, PresetsArgs, ValidateArgs};

/// Furnish - parametric furniture configurator engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a configuration query string
    Validate(ValidateArgs),
    /// Derive the section layout for a configuration
    Derive(DeriveArgs),
    /// Encode and decode shareable configuration links
    Link(LinkArgs),
    /// Inspect the ready-made product presets
    Presets(PresetsArgs),
    /// Show or change the deployment configuration
    Config(ConfigArgs),
    /// Check asset catalog, presets, and environment health
    Doctor(DoctorArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Validate(args) => args.execute(),
        Commands::Derive(args) => args.execute(),
        Commands::Link(args) => args.execute(),
        Commands::Presets(args) => args.execute(),
        Commands::Config(args) => args.execute(),
        Commands::Doctor(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(err.exit_code().code());
    }
}
