//! Ready-made product presets.
//!
//! Presets are authored catalog data. Historic entries disagree on how
//! dimensions are written — some structured, some as a single
//! `WxHxD/P` string, one with a misspelled `plintheight` key — so every
//! entry is normalized onto the structured [`Dimensions`] representation
//! at load time and the divergent forms are never re-emitted.
//!
//! Loading also derives each preset's layout once; applying a preset to a
//! session installs that precomputed layout without re-derivation.

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

use crate::constraints::{validate_configuration, ValidationPolicy};
use crate::layout::{derive_layout, AssetCatalog, SectionLayout};
use crate::models::{
    ColumnConfiguration, ColumnKind, Configuration, Dimensions, FinishColor, FurnitureOptions,
    FurnitureType, OpeningType,
};
use crate::pricing::Money;

/// A normalized ready-made product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPreset {
    /// URL slug, unique within the catalog
    pub slug: String,
    /// Display name
    pub name: String,
    /// Product category
    pub furniture_type: FurnitureType,
    /// Normalized structured dimensions
    pub dimensions: Dimensions,
    /// Surface finish
    pub color: FinishColor,
    /// Column kinds, left to right
    pub columns: Vec<ColumnConfiguration>,
    /// Opening style
    pub opening: OpeningType,
    /// Listed price
    pub price: Money,
}

/// A preset together with its layout, derived once at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPreset {
    /// The normalized preset
    pub preset: ProductPreset,
    /// Precomputed layout, adopted by sessions without re-derivation
    pub layout: SectionLayout,
}

impl LoadedPreset {
    /// Builds the configuration a session adopts for this preset.
    #[must_use]
    pub fn to_configuration(&self) -> Configuration {
        Configuration {
            furniture_type: self.preset.furniture_type,
            dimensions: self.preset.dimensions,
            selected_sections: self.preset.columns.len(),
            columns: self.preset.columns.clone(),
            color: self.preset.color,
            options: FurnitureOptions {
                opening: self.preset.opening,
                ..FurnitureOptions::default()
            },
            price: self.preset.price,
        }
    }
}

/// The ready-made product catalog.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: Vec<LoadedPreset>,
}

impl PresetCatalog {
    /// Loads the presets bundled with the crate.
    pub fn built_in(assets: &AssetCatalog) -> Result<Self> {
        Self::from_toml_str(include_str!("presets.toml"), assets)
            .context("bundled preset catalog is invalid")
    }

    /// Loads a preset catalog from a TOML file.
    pub fn load(path: &Path, assets: &AssetCatalog) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read preset catalog {}", path.display()))?;
        Self::from_toml_str(&raw, assets)
            .with_context(|| format!("invalid preset catalog {}", path.display()))
    }

    /// Parses and normalizes a preset catalog from TOML text.
    ///
    /// Every preset is validated against its type's constraints and its
    /// layout derived once; any failure is an authoring error and aborts
    /// the load.
    pub fn from_toml_str(raw: &str, assets: &AssetCatalog) -> Result<Self> {
        let file: RawCatalog = toml::from_str(raw).context("failed to parse preset TOML")?;
        let mut presets = Vec::with_capacity(file.presets.len());

        for raw_preset in file.presets {
            let loaded = normalize_preset(raw_preset, assets)?;
            if presets
                .iter()
                .any(|p: &LoadedPreset| p.preset.slug == loaded.preset.slug)
            {
                bail!("duplicate preset slug '{}'", loaded.preset.slug);
            }
            presets.push(loaded);
        }

        Ok(Self { presets })
    }

    /// Looks a preset up by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&LoadedPreset> {
        self.presets.iter().find(|p| p.preset.slug == slug)
    }

    /// All presets, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &LoadedPreset> {
        self.presets.iter()
    }

    /// Number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    presets: Vec<RawPreset>,
}

#[derive(Debug, Deserialize)]
struct RawPreset {
    slug: String,
    name: String,
    #[serde(rename = "type")]
    furniture_type: FurnitureType,
    color: FinishColor,
    sections: usize,
    columns: Vec<ColumnKind>,
    #[serde(default)]
    opening: OpeningType,
    dimensions: RawDimensions,
    price_cents: i64,
}

/// The dimension forms found in historic preset data.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDimensions {
    /// The structured representation all presets are normalized onto
    Structured {
        width: f32,
        height: f32,
        depth: f32,
        // one historic batch shipped the key misspelled
        #[serde(default, alias = "plintheight")]
        plinth_height: Option<f32>,
    },
    /// Pre-formatted "WxHxD" or "WxHxD/P" string
    Legacy(String),
}

fn normalize_preset(raw: RawPreset, assets: &AssetCatalog) -> Result<LoadedPreset> {
    let slug = raw.slug;
    if raw.columns.len() != raw.sections {
        bail!(
            "preset '{slug}': sections={} but {} columns listed",
            raw.sections,
            raw.columns.len()
        );
    }

    let dimensions = normalize_dimensions(raw.dimensions, raw.furniture_type)
        .with_context(|| format!("preset '{slug}': bad dimensions"))?;

    let columns: Vec<ColumnConfiguration> = raw
        .columns
        .into_iter()
        .map(|kind| ColumnConfiguration::new(kind).normalized())
        .collect();

    let preset = ProductPreset {
        slug,
        name: raw.name,
        furniture_type: raw.furniture_type,
        dimensions,
        color: raw.color,
        columns,
        opening: raw.opening,
        price: Money::from_cents(raw.price_cents),
    };

    let config = Configuration {
        furniture_type: preset.furniture_type,
        dimensions: preset.dimensions,
        selected_sections: preset.columns.len(),
        columns: preset.columns.clone(),
        color: preset.color,
        options: FurnitureOptions {
            opening: preset.opening,
            ..FurnitureOptions::default()
        },
        price: preset.price,
    };
    let outcome = validate_configuration(&config, ValidationPolicy::Reject);
    if !outcome.report.is_valid() {
        bail!(
            "preset '{}' violates constraints:\n{}",
            preset.slug,
            outcome.report.format_message()
        );
    }

    let layout = derive_layout(
        preset.furniture_type,
        &preset.dimensions,
        preset.color,
        preset.opening,
        &preset.columns,
        assets,
    )
    .with_context(|| format!("preset '{}' cannot be laid out", preset.slug))?;

    Ok(LoadedPreset { preset, layout })
}

fn normalize_dimensions(raw: RawDimensions, furniture_type: FurnitureType) -> Result<Dimensions> {
    let default_plinth = Configuration::defaults_for(furniture_type)
        .dimensions
        .plinth_height;
    match raw {
        RawDimensions::Structured {
            width,
            height,
            depth,
            plinth_height,
        } => Ok(Dimensions::new(
            width,
            height,
            depth,
            plinth_height.unwrap_or(default_plinth),
        )),
        RawDimensions::Legacy(text) => {
            static DIM_RE: OnceLock<Regex> = OnceLock::new();
            let re = DIM_RE.get_or_init(|| {
                Regex::new(
                    r"^(\d+(?:\.\d+)?)x(\d+(?:\.\d+)?)x(\d+(?:\.\d+)?)(?:/(\d+(?:\.\d+)?))?$",
                )
                .expect("dimension pattern is valid")
            });
            let captures = re
                .captures(text.trim())
                .with_context(|| format!("unparseable dimension string '{text}'"))?;
            let width: f32 = captures[1].parse().context("bad width")?;
            let height: f32 = captures[2].parse().context("bad height")?;
            let depth: f32 = captures[3].parse().context("bad depth")?;
            let plinth = captures
                .get(4)
                .map(|m| m.as_str().parse::<f32>())
                .transpose()
                .context("bad plinth height")?
                .unwrap_or(default_plinth);
            Ok(Dimensions::new(width, height, depth, plinth))
        }
    }
}
