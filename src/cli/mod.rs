//! CLI command handlers for Furnish.
//!
//! This module provides headless, scriptable access to the configurator
//! engine for automation, testing, and CI integration.

pub mod common;
pub mod config;
pub mod derive;
pub mod doctor;
pub mod link;
pub mod presets;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode, PolicyArg};
pub use config::ConfigArgs;
pub use derive::DeriveArgs;
pub use doctor::DoctorArgs;
pub use link::LinkArgs;
pub use presets::PresetsArgs;
pub use validate::ValidateArgs;
