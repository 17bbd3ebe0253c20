//! The configuration state store.
//!
//! One store instance owns one configurator session's authoritative
//! [`Configuration`]. Every mutation runs the full pipeline — normalize,
//! validate, derive, price, re-serialize the share query — before control
//! returns to the caller, so no observer can see a half-applied state.
//! Rejected updates leave the previous valid state untouched.
//!
//! The store is single-writer by design; hosts that dispatch concurrently
//! must serialize their calls through one owner.

use crate::cart::CartLineItem;
use crate::constraints::{validate_configuration, ValidationPolicy, ValidationReport};
use crate::layout::{derive_layout, AssetCatalog, LayoutError, SectionLayout};
use crate::models::{
    ColumnConfiguration, Configuration, DoorSide, DrawerGuides, FinishColor, FurnitureType,
    HingeType, OpeningType,
};
use crate::pricing::price_of;
use crate::presets::LoadedPreset;
use crate::query::{self, QueryIssue, QueryIssueKind};

/// A partial update to a configuration.
///
/// Unset fields keep their current value. Changing the furniture type
/// resets the session to that type's defaults before the remaining patch
/// fields are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigPatch {
    /// New furniture type
    pub furniture_type: Option<FurnitureType>,
    /// New overall width
    pub width: Option<f32>,
    /// New overall height
    pub height: Option<f32>,
    /// New overall depth
    pub depth: Option<f32>,
    /// New plinth height
    pub plinth_height: Option<f32>,
    /// New section count
    pub selected_sections: Option<usize>,
    /// Replacement column list
    pub columns: Option<Vec<ColumnConfiguration>>,
    /// New finish
    pub color: Option<FinishColor>,
    /// New opening style
    pub opening: Option<OpeningType>,
    /// New hinge grade
    pub hinges: Option<HingeType>,
    /// New drawer guide grade
    pub guides: Option<DrawerGuides>,
}

impl ConfigPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the overall width.
    #[must_use]
    pub const fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the overall height.
    #[must_use]
    pub const fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the section count.
    #[must_use]
    pub const fn with_sections(mut self, sections: usize) -> Self {
        self.selected_sections = Some(sections);
        self
    }

    /// Replaces the column list.
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<ColumnConfiguration>) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Sets the finish.
    #[must_use]
    pub const fn with_color(mut self, color: FinishColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the opening style.
    #[must_use]
    pub const fn with_opening(mut self, opening: OpeningType) -> Self {
        self.opening = Some(opening);
        self
    }

    fn apply_to(&self, config: &mut Configuration) {
        if let Some(width) = self.width {
            config.dimensions.width = width;
        }
        if let Some(height) = self.height {
            config.dimensions.height = height;
        }
        if let Some(depth) = self.depth {
            config.dimensions.depth = depth;
        }
        if let Some(plinth) = self.plinth_height {
            config.dimensions.plinth_height = plinth;
        }
        if let Some(sections) = self.selected_sections {
            config.selected_sections = sections;
        }
        if let Some(columns) = &self.columns {
            config.columns = columns.clone();
            if self.selected_sections.is_none() {
                config.selected_sections = columns.len();
            }
        }
        if let Some(color) = self.color {
            config.color = color;
        }
        if let Some(opening) = self.opening {
            config.options.opening = opening;
        }
        if let Some(hinges) = self.hinges {
            config.options.hinges = hinges;
        }
        if let Some(guides) = self.guides {
            config.options.guides = guides;
        }
    }
}

/// What an update did.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct UpdateOutcome {
    /// Whether the candidate state was committed
    pub applied: bool,
    /// Violations and adjustments from validation
    pub report: ValidationReport,
    /// Derivation failure, when one blocked the commit
    pub layout_error: Option<LayoutError>,
}

/// Authoritative configuration state for one configurator session.
#[derive(Debug, Clone)]
pub struct ConfiguratorStore {
    config: Configuration,
    layout: SectionLayout,
    report: ValidationReport,
    query: String,
    catalog: AssetCatalog,
    policy: ValidationPolicy,
}

impl ConfiguratorStore {
    /// Opens a session with the type's defaults and the standard asset
    /// catalog.
    pub fn new(furniture_type: FurnitureType) -> Result<Self, LayoutError> {
        Self::with_catalog(furniture_type, ValidationPolicy::default(), AssetCatalog::standard())
    }

    /// Opens a session with an explicit policy and catalog.
    pub fn with_catalog(
        furniture_type: FurnitureType,
        policy: ValidationPolicy,
        catalog: AssetCatalog,
    ) -> Result<Self, LayoutError> {
        let mut config = Configuration::defaults_for(furniture_type);
        let layout = derive_for(&config, &catalog)?;
        config.price = price_of(&config);
        let query = query::serialize(&config);
        Ok(Self {
            config,
            layout,
            report: ValidationReport::new(),
            query,
            catalog,
            policy,
        })
    }

    /// Restores a session from a share-link query string.
    ///
    /// The parsed configuration runs through the same validation as a user
    /// edit; fields that violate the type's constraints degrade to the
    /// type defaults and are reported as issues, so a stale link opens a
    /// working configurator instead of an error page.
    ///
    /// # Errors
    ///
    /// Only [`LayoutError::AssetNotFound`]: a catalog gap is an engine bug,
    /// not a property of the link.
    pub fn from_query(
        query_string: &str,
        policy: ValidationPolicy,
        catalog: AssetCatalog,
    ) -> Result<(Self, Vec<QueryIssue>), LayoutError> {
        let parsed = query::parse(query_string);
        let mut config = parsed.configuration;
        let mut issues = parsed.issues;
        let defaults = Configuration::defaults_for(config.furniture_type);

        // Degrade range/step violations field by field against defaults.
        let outcome = validate_configuration(&config, ValidationPolicy::Reject);
        for violation in &outcome.report.violations {
            let key = match violation.field {
                "width" => {
                    config.dimensions.width = defaults.dimensions.width;
                    "w"
                }
                "height" => {
                    config.dimensions.height = defaults.dimensions.height;
                    "h"
                }
                "depth" => {
                    config.dimensions.depth = defaults.dimensions.depth;
                    "d"
                }
                "plinth_height" => {
                    config.dimensions.plinth_height = defaults.dimensions.plinth_height;
                    "ph"
                }
                "selected_sections" => {
                    config.selected_sections = defaults.selected_sections;
                    config.normalize_columns();
                    "sections"
                }
                "color" => {
                    config.color = defaults.color;
                    "color"
                }
                // column kinds were already degraded during parsing
                _ => continue,
            };
            issues.push(QueryIssue {
                key: key.to_string(),
                given: violation.message.clone(),
                kind: QueryIssueKind::OutOfRange,
            });
        }

        let layout = match derive_for(&config, &catalog) {
            Ok(layout) => layout,
            Err(LayoutError::InsufficientWidth { .. }) => {
                // Consistent fields can still be jointly impossible (many
                // sections squeezed into a narrow width); fall back to the
                // largest section count the width can hold.
                issues.push(QueryIssue {
                    key: "sections".to_string(),
                    given: config.selected_sections.to_string(),
                    kind: QueryIssueKind::OutOfRange,
                });
                config.selected_sections =
                    max_sections_for_width(config.furniture_type, config.dimensions.width);
                config.normalize_columns();
                derive_for(&config, &catalog)?
            }
            Err(err) => return Err(err),
        };

        config.price = price_of(&config);
        let query = query::serialize(&config);
        Ok((
            Self {
                config,
                layout,
                report: ValidationReport::new(),
                query,
                catalog,
                policy,
            },
            issues,
        ))
    }

    /// The current configuration.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// The layout derived from the current configuration.
    #[must_use]
    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    /// The validation report of the most recent update attempt.
    #[must_use]
    pub fn last_report(&self) -> &ValidationReport {
        &self.report
    }

    /// The canonical share-link query for the current configuration.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Applies a partial patch.
    pub fn update(&mut self, patch: &ConfigPatch) -> UpdateOutcome {
        let mut candidate = match patch.furniture_type {
            Some(t) if t != self.config.furniture_type => Configuration::defaults_for(t),
            _ => self.config.clone(),
        };
        patch.apply_to(&mut candidate);
        self.commit(candidate)
    }

    /// Applies an updater function to a copy of the current configuration.
    pub fn update_with(&mut self, f: impl FnOnce(&mut Configuration)) -> UpdateOutcome {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        self.commit(candidate)
    }

    /// Replaces one column's configuration.
    pub fn set_column(&mut self, index: usize, column: ColumnConfiguration) -> UpdateOutcome {
        self.update_with(|config| {
            if let Some(slot) = config.columns.get_mut(index) {
                *slot = column;
            }
        })
    }

    /// Sets one column's door opening side.
    pub fn set_door_opening_side(&mut self, index: usize, side: DoorSide) -> UpdateOutcome {
        self.update_with(|config| {
            if let Some(slot) = config.columns.get_mut(index) {
                slot.door_opening_side = Some(side);
            }
        })
    }

    /// Replaces the whole session with a ready-made preset.
    ///
    /// Adopts the preset's precomputed layout without re-derivation; the
    /// configuration becomes the preset's, priced at the preset's listed
    /// price.
    pub fn apply_preset(&mut self, preset: &LoadedPreset) {
        self.config = preset.to_configuration();
        self.layout = preset.layout.clone();
        self.report = ValidationReport::new();
        self.query = query::serialize(&self.config);
    }

    /// Snapshots the current configuration into a cart line item.
    #[must_use]
    pub fn to_cart_item(&self, quantity: u32) -> CartLineItem {
        CartLineItem::from_configuration(&self.config, quantity)
    }

    fn commit(&mut self, mut candidate: Configuration) -> UpdateOutcome {
        candidate.normalize_columns();

        let outcome = validate_configuration(&candidate, self.policy);
        if !outcome.report.is_valid() {
            self.report = outcome.report.clone();
            return UpdateOutcome {
                applied: false,
                report: outcome.report,
                layout_error: None,
            };
        }
        let mut candidate = outcome.configuration;

        match derive_for(&candidate, &self.catalog) {
            Ok(layout) => {
                candidate.price = price_of(&candidate);
                self.query = query::serialize(&candidate);
                self.config = candidate;
                self.layout = layout;
                self.report = outcome.report.clone();
                UpdateOutcome {
                    applied: true,
                    report: outcome.report,
                    layout_error: None,
                }
            }
            Err(err) => {
                self.report = outcome.report.clone();
                UpdateOutcome {
                    applied: false,
                    report: outcome.report,
                    layout_error: Some(err),
                }
            }
        }
    }
}

/// Largest section count the width can hold for a type, floored at the
/// type's minimum.
fn max_sections_for_width(furniture_type: FurnitureType, width: f32) -> usize {
    let constraints = crate::constraints::Constraints::for_type(furniture_type);
    let panels = constraints.panels;
    (constraints.section_count.min..=constraints.section_count.max)
        .rev()
        .find(|&n| {
            let fixed = 2.0 * panels.side_panel + (n as f32 - 1.0) * panels.divider;
            let required = crate::layout::required_usable_width(
                constraints.min_column_width,
                n,
                crate::layout::width_ratios(furniture_type, n),
            );
            width - fixed >= required - 1e-3
        })
        .unwrap_or(constraints.section_count.min)
}

fn derive_for(
    config: &Configuration,
    catalog: &AssetCatalog,
) -> Result<SectionLayout, LayoutError> {
    derive_layout(
        config.furniture_type,
        &config.dimensions,
        config.color,
        config.options.opening,
        &config.columns,
        catalog,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::ViolationKind;
    use crate::models::ColumnKind;
    use crate::pricing::Money;

    #[test]
    fn test_new_session_is_derived_and_priced() {
        let store = ConfiguratorStore::new(FurnitureType::Wardrobe).unwrap();
        assert_eq!(store.layout().derived_sections, 4);
        assert!(store.configuration().price > Money::zero());
        assert!(store.query().starts_with("type=wardrobe&"));
        assert!(store.last_report().is_valid());
    }

    #[test]
    fn test_update_rederives_layout() {
        let mut store = ConfiguratorStore::new(FurnitureType::Wardrobe).unwrap();
        let before = store.configuration().price;

        let outcome = store.update(&ConfigPatch::new().with_sections(2).with_width(150.0));
        assert!(outcome.applied);
        assert_eq!(store.layout().derived_sections, 2);
        assert_eq!(store.configuration().columns.len(), 2);
        assert_ne!(store.configuration().price, before);
        assert!(store.query().contains("sections=2"));
    }

    #[test]
    fn test_section_count_rejection_keeps_previous_state() {
        // stand allows at most 3 sections
        let mut store = ConfiguratorStore::new(FurnitureType::Stand).unwrap();
        let before = store.configuration().clone();
        let layout_before = store.layout().clone();

        let outcome = store.update(&ConfigPatch::new().with_sections(4));
        assert!(!outcome.applied);
        assert_eq!(
            outcome.report.violations[0].kind,
            ViolationKind::SectionCountOutOfRange
        );
        assert_eq!(outcome.report.violated_fields(), vec!["selected_sections"]);

        assert_eq!(store.configuration(), &before);
        assert_eq!(store.layout(), &layout_before);
        // the failed report stays readable for the UI
        assert!(!store.last_report().is_valid());
    }

    #[test]
    fn test_clamp_policy_snaps_dimensions() {
        let mut store = ConfiguratorStore::new(FurnitureType::Wardrobe).unwrap();
        let outcome = store.update(&ConfigPatch::new().with_width(400.0));
        assert!(outcome.applied);
        assert_eq!(outcome.report.adjustments.len(), 1);
        assert_eq!(store.configuration().dimensions.width, 300.0);
    }

    #[test]
    fn test_reject_policy_blocks_dimensions() {
        let mut store = ConfiguratorStore::with_catalog(
            FurnitureType::Wardrobe,
            ValidationPolicy::Reject,
            AssetCatalog::standard(),
        )
        .unwrap();
        let outcome = store.update(&ConfigPatch::new().with_width(400.0));
        assert!(!outcome.applied);
        assert_eq!(store.configuration().dimensions.width, 200.0);
    }

    #[test]
    fn test_insufficient_width_rolls_back() {
        let mut store = ConfiguratorStore::new(FurnitureType::Wardrobe).unwrap();
        // 6 sections need 6*40 plus panels; 150 cm cannot hold them
        let outcome = store.update(&ConfigPatch::new().with_width(150.0).with_sections(6));
        assert!(!outcome.applied);
        match outcome.layout_error {
            Some(LayoutError::InsufficientWidth { required_width, .. }) => {
                assert!(required_width > 150.0);
            }
            other => panic!("expected InsufficientWidth, got {other:?}"),
        }
        assert_eq!(store.configuration().selected_sections, 4);
    }

    #[test]
    fn test_furniture_type_change_resets_to_defaults() {
        let mut store = ConfiguratorStore::new(FurnitureType::Wardrobe).unwrap();
        let _ = store.update(&ConfigPatch::new().with_color(FinishColor::Walnut));

        let mut patch = ConfigPatch::new();
        patch.furniture_type = Some(FurnitureType::GreenWall);
        let outcome = store.update(&patch);
        assert!(outcome.applied);

        let config = store.configuration();
        assert_eq!(config.furniture_type, FurnitureType::GreenWall);
        // walnut is not carried over; green walls default to graphite
        assert_eq!(config.color, FinishColor::Graphite);
    }

    #[test]
    fn test_update_with_function() {
        let mut store = ConfiguratorStore::new(FurnitureType::Wardrobe).unwrap();
        let outcome = store.update_with(|config| {
            config.dimensions.width = 150.0;
            config.selected_sections = 2;
            config.columns = vec![
                ColumnConfiguration::new(ColumnKind::DoubleDoor),
                ColumnConfiguration::new(ColumnKind::SingleDoor),
            ];
        });
        assert!(outcome.applied);
        assert_eq!(store.layout().columns[0].door_opening_side, None);
        assert_eq!(
            store.layout().columns[1].door_opening_side,
            Some(DoorSide::Left)
        );
    }

    #[test]
    fn test_set_door_opening_side() {
        let mut store = ConfiguratorStore::new(FurnitureType::Wardrobe).unwrap();
        let outcome = store.set_door_opening_side(0, DoorSide::Right);
        assert!(outcome.applied);
        assert_eq!(
            store.layout().columns[0].door_opening_side,
            Some(DoorSide::Right)
        );
        assert!(store.query().contains("side0=right"));
    }

    #[test]
    fn test_query_round_trip_through_store() {
        let mut store = ConfiguratorStore::new(FurnitureType::Wardrobe).unwrap();
        let outcome = store.update_with(|config| {
            config.dimensions.width = 162.0;
            config.selected_sections = 3;
            config.normalize_columns();
            config.columns[1].kind = ColumnKind::HangingRail;
            config.color = FinishColor::Oak;
            config.options.opening = OpeningType::RoundHandle;
        });
        assert!(outcome.applied);

        let (restored, issues) = ConfiguratorStore::from_query(
            store.query(),
            ValidationPolicy::Clamp,
            AssetCatalog::standard(),
        )
        .unwrap();
        assert!(issues.is_empty());
        assert_eq!(restored.configuration(), store.configuration());
        assert_eq!(restored.query(), store.query());
    }

    #[test]
    fn test_from_query_degrades_out_of_range_fields() {
        // width beyond the wardrobe maximum degrades to the default width
        let (store, issues) = ConfiguratorStore::from_query(
            "type=wardrobe&w=999&sections=2",
            ValidationPolicy::Clamp,
            AssetCatalog::standard(),
        )
        .unwrap();
        assert_eq!(store.configuration().dimensions.width, 200.0);
        assert_eq!(store.configuration().selected_sections, 2);
        assert!(issues.iter().any(|i| i.key == "w" && i.kind == QueryIssueKind::OutOfRange));
    }

    #[test]
    fn test_from_query_tampered_type() {
        let (store, issues) = ConfiguratorStore::from_query(
            "type=hovercraft",
            ValidationPolicy::Clamp,
            AssetCatalog::standard(),
        )
        .unwrap();
        assert_eq!(store.configuration().furniture_type, FurnitureType::Wardrobe);
        assert_eq!(issues[0].kind, QueryIssueKind::UnknownFurnitureType);
    }

    #[test]
    fn test_from_query_jointly_impossible_falls_back() {
        // 6 sections at the minimum wardrobe width: each field is in range
        // but the combination cannot be laid out; 100 cm holds 2 columns
        let (store, issues) = ConfiguratorStore::from_query(
            "type=wardrobe&w=100&sections=6",
            ValidationPolicy::Clamp,
            AssetCatalog::standard(),
        )
        .unwrap();
        assert_eq!(store.configuration().selected_sections, 2);
        assert_eq!(store.configuration().dimensions.width, 100.0);
        assert!(issues
            .iter()
            .any(|i| i.key == "sections" && i.kind == QueryIssueKind::OutOfRange));
    }

    #[test]
    fn test_apply_preset_replaces_session_wholesale() {
        let assets = AssetCatalog::standard();
        let presets = crate::presets::PresetCatalog::built_in(&assets).unwrap();
        let preset = presets.get("wardrobe-compact-150").unwrap();

        let mut store = ConfiguratorStore::new(FurnitureType::Stand).unwrap();
        store.apply_preset(preset);

        assert_eq!(store.configuration().furniture_type, FurnitureType::Wardrobe);
        // the precomputed layout is adopted as-is
        assert_eq!(store.layout(), &preset.layout);
        assert_eq!(store.configuration().price, preset.preset.price);
        assert!(store.query().starts_with("type=wardrobe&w=150&"));
        assert!(store.last_report().is_valid());
    }

    #[test]
    fn test_cart_snapshot_detached_from_session() {
        let mut store = ConfiguratorStore::new(FurnitureType::Stand).unwrap();
        let item = store.to_cart_item(1);
        assert_eq!(item.unit_price, store.configuration().price);

        let _ = store.update(&ConfigPatch::new().with_width(90.0));
        assert_eq!(item.dimensions.width, 120.0);
    }
}
