//! Environment and data health checks.

use clap::Args;
use serde::Serialize;

use crate::capability::detect_render_capability;
use crate::cli::common::{CliError, CliResult};
use crate::config::AppConfig;
use crate::constants::APP_NAME;
use crate::layout::AssetCatalog;
use crate::presets::PresetCatalog;

/// Check asset catalog, presets, and environment health
#[derive(Debug, Clone, Args)]
pub struct DoctorArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One doctor check result.
#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    ok: bool,
    detail: String,
}

/// JSON response of the doctor command.
#[derive(Debug, Serialize)]
struct DoctorReport {
    ok: bool,
    checks: Vec<DoctorCheck>,
}

impl DoctorArgs {
    /// Execute the doctor command
    pub fn execute(&self) -> CliResult<()> {
        let mut checks = Vec::new();

        let assets = AssetCatalog::standard();
        let missing = assets.missing();
        checks.push(DoctorCheck {
            name: "asset catalog",
            ok: missing.is_empty(),
            detail: if missing.is_empty() {
                format!("{} arrangement images", assets.len())
            } else {
                // a gap here means AssetNotFound at runtime; surface every key
                let keys: Vec<String> = missing.iter().map(ToString::to_string).collect();
                format!("{} missing: {}", missing.len(), keys.join(", "))
            },
        });

        match PresetCatalog::built_in(&assets) {
            Ok(catalog) => checks.push(DoctorCheck {
                name: "bundled presets",
                ok: true,
                detail: format!("{} presets load and derive", catalog.len()),
            }),
            Err(err) => checks.push(DoctorCheck {
                name: "bundled presets",
                ok: false,
                detail: format!("{err:#}"),
            }),
        }

        checks.push(DoctorCheck {
            name: "render capability",
            ok: true,
            detail: if detect_render_capability() {
                "3D rendering available".to_string()
            } else {
                "falling back to flat imagery".to_string()
            },
        });

        checks.push(DoctorCheck {
            name: "config file",
            ok: true,
            detail: if AppConfig::exists() {
                AppConfig::config_file()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default()
            } else {
                "not present, using defaults".to_string()
            },
        });

        let report = DoctorReport {
            ok: checks.iter().all(|c| c.ok),
            checks,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::io(format!("failed to serialize JSON: {e}")))?
            );
        } else {
            println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
            for check in &report.checks {
                let mark = if check.ok { "✓" } else { "✗" };
                println!("{} {}: {}", mark, check.name, check.detail);
            }
        }

        if !report.ok {
            return Err(CliError::validation("doctor found problems"));
        }
        Ok(())
    }
}
