//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving deployment
//! configuration in TOML format with platform-specific directory
//! resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constraints::ValidationPolicy;

/// Deployment configuration.
///
/// Covers the per-deployment policy choices the engine leaves open: how
/// dimension violations are handled, and where an overriding preset
/// catalog lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// How dimension constraint violations are handled
    #[serde(default)]
    pub policy: ValidationPolicy,
    /// Preset catalog overriding the bundled one
    #[serde(default)]
    pub presets_path: Option<PathBuf>,
}

impl AppConfig {
    /// Gets the platform configuration directory.
    ///
    /// - Linux: `~/.config/Furnish/`
    /// - macOS: `~/Library/Application Support/Furnish/`
    /// - Windows: `%APPDATA%\Furnish\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine platform config directory")?;
        Ok(base.join("Furnish"))
    }

    /// Gets the configuration file path.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Whether a configuration file exists.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file().map(|p| p.exists()).unwrap_or(false)
    }

    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Saves the configuration, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
        let path = Self::config_file()?;
        let raw = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(&path, raw)
            .with_context(|| format!("failed to write config file {}", path.display()))
    }
}
