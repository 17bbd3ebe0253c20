//! Per-type dimension and section constraint tables, plus validation.
//!
//! The tables are read-only after initialization; validation returns
//! reports as values so the UI can render field-level feedback instead of
//! catching panics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{ColumnKind, Configuration, Dimensions, FinishColor, FurnitureType};

/// Tolerance for step-grid membership checks, in centimetres.
const STEP_EPSILON: f32 = 1e-3;

/// Allowed range and step granularity for one dimension field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionRange {
    /// Minimum value (inclusive)
    pub min: f32,
    /// Maximum value (inclusive)
    pub max: f32,
    /// Step granularity; valid values are `min + k * step`
    pub step: f32,
}

impl DimensionRange {
    /// Creates a range.
    #[must_use]
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Whether the value lies in range on the step grid.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        if value < self.min - STEP_EPSILON || value > self.max + STEP_EPSILON {
            return false;
        }
        let offset = (value - self.min) / self.step;
        (offset - offset.round()).abs() * self.step <= STEP_EPSILON
    }

    /// Snaps a value onto the nearest valid grid point within range.
    #[must_use]
    pub fn snap(&self, value: f32) -> f32 {
        let max_index = ((self.max - self.min) / self.step).floor();
        let index = ((value - self.min) / self.step).round().clamp(0.0, max_index);
        self.min + index * self.step
    }

    /// Human-readable description of the allowed values.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{}..{} cm in steps of {} cm", self.min, self.max, self.step)
    }
}

/// Allowed section/column counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRange {
    /// Minimum section count (inclusive)
    pub min: usize,
    /// Maximum section count (inclusive)
    pub max: usize,
}

impl SectionRange {
    /// Whether the count is allowed.
    #[must_use]
    pub const fn contains(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

/// Fixed panel thicknesses used by layout derivation, per furniture type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Thickness of each of the two side panels
    pub side_panel: f32,
    /// Thickness of the top panel
    pub top_panel: f32,
    /// Thickness of the bottom panel
    pub bottom_panel: f32,
    /// Thickness of each divider between columns
    pub divider: f32,
}

/// Complete constraint set for one furniture type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Overall width range
    pub width: DimensionRange,
    /// Overall height range
    pub height: DimensionRange,
    /// Overall depth range
    pub depth: DimensionRange,
    /// Plinth height range
    pub plinth_height: DimensionRange,
    /// Allowed section counts
    pub section_count: SectionRange,
    /// Minimum width one column may occupy
    pub min_column_width: f32,
    /// Panel thicknesses for layout derivation
    pub panels: PanelSpec,
}

impl Constraints {
    /// Constraint table for a furniture type.
    ///
    /// Pure, total lookup: the closed enum makes an unknown tag
    /// unrepresentable here, so the authoring-error branch lives at the
    /// parse boundary instead.
    #[must_use]
    pub const fn for_type(furniture_type: FurnitureType) -> Self {
        match furniture_type {
            FurnitureType::Wardrobe => Self {
                width: DimensionRange::new(100.0, 300.0, 1.0),
                height: DimensionRange::new(180.0, 260.0, 1.0),
                depth: DimensionRange::new(40.0, 70.0, 1.0),
                plinth_height: DimensionRange::new(3.0, 10.0, 1.0),
                section_count: SectionRange { min: 1, max: 6 },
                min_column_width: 40.0,
                panels: PanelSpec {
                    side_panel: 2.0,
                    top_panel: 2.0,
                    bottom_panel: 2.0,
                    divider: 1.8,
                },
            },
            FurnitureType::Stand => Self {
                width: DimensionRange::new(60.0, 180.0, 1.0),
                height: DimensionRange::new(60.0, 120.0, 1.0),
                depth: DimensionRange::new(35.0, 50.0, 1.0),
                plinth_height: DimensionRange::new(2.0, 8.0, 1.0),
                section_count: SectionRange { min: 1, max: 3 },
                min_column_width: 30.0,
                panels: PanelSpec {
                    side_panel: 2.0,
                    top_panel: 2.0,
                    bottom_panel: 2.0,
                    divider: 1.8,
                },
            },
            FurnitureType::TvStand => Self {
                width: DimensionRange::new(120.0, 240.0, 5.0),
                height: DimensionRange::new(30.0, 60.0, 1.0),
                depth: DimensionRange::new(35.0, 50.0, 1.0),
                plinth_height: DimensionRange::new(2.0, 6.0, 1.0),
                section_count: SectionRange { min: 2, max: 4 },
                min_column_width: 40.0,
                panels: PanelSpec {
                    side_panel: 2.0,
                    top_panel: 2.0,
                    bottom_panel: 2.0,
                    divider: 1.8,
                },
            },
            FurnitureType::Bedside => Self {
                width: DimensionRange::new(40.0, 60.0, 1.0),
                height: DimensionRange::new(40.0, 70.0, 1.0),
                depth: DimensionRange::new(35.0, 45.0, 1.0),
                plinth_height: DimensionRange::new(2.0, 5.0, 1.0),
                section_count: SectionRange { min: 1, max: 2 },
                min_column_width: 18.0,
                panels: PanelSpec {
                    side_panel: 1.8,
                    top_panel: 1.8,
                    bottom_panel: 1.8,
                    divider: 1.6,
                },
            },
            FurnitureType::OfficeTable => Self {
                width: DimensionRange::new(100.0, 200.0, 1.0),
                height: DimensionRange::new(60.0, 90.0, 1.0),
                depth: DimensionRange::new(50.0, 80.0, 1.0),
                plinth_height: DimensionRange::new(0.0, 0.0, 1.0),
                section_count: SectionRange { min: 1, max: 2 },
                min_column_width: 40.0,
                panels: PanelSpec {
                    side_panel: 2.5,
                    top_panel: 2.5,
                    bottom_panel: 0.0,
                    divider: 2.0,
                },
            },
            FurnitureType::GreenWall => Self {
                width: DimensionRange::new(60.0, 200.0, 10.0),
                height: DimensionRange::new(60.0, 200.0, 10.0),
                depth: DimensionRange::new(10.0, 20.0, 1.0),
                plinth_height: DimensionRange::new(0.0, 0.0, 1.0),
                section_count: SectionRange { min: 1, max: 4 },
                min_column_width: 30.0,
                panels: PanelSpec {
                    side_panel: 1.5,
                    top_panel: 1.5,
                    bottom_panel: 1.5,
                    divider: 1.0,
                },
            },
            FurnitureType::Storage => Self {
                width: DimensionRange::new(80.0, 240.0, 1.0),
                height: DimensionRange::new(180.0, 240.0, 1.0),
                depth: DimensionRange::new(35.0, 60.0, 1.0),
                plinth_height: DimensionRange::new(3.0, 10.0, 1.0),
                section_count: SectionRange { min: 1, max: 4 },
                min_column_width: 40.0,
                panels: PanelSpec {
                    side_panel: 2.0,
                    top_panel: 2.0,
                    bottom_panel: 2.0,
                    divider: 1.8,
                },
            },
        }
    }

    /// Column kinds offered for this furniture type.
    #[must_use]
    pub const fn allowed_column_kinds(furniture_type: FurnitureType) -> &'static [ColumnKind] {
        match furniture_type {
            FurnitureType::Wardrobe => &[
                ColumnKind::SingleDoor,
                ColumnKind::DoubleDoor,
                ColumnKind::OpenShelf,
                ColumnKind::DrawerStack,
                ColumnKind::DoorOverDrawers,
                ColumnKind::HangingRail,
            ],
            FurnitureType::Stand => &[
                ColumnKind::SingleDoor,
                ColumnKind::DoubleDoor,
                ColumnKind::OpenShelf,
                ColumnKind::DrawerStack,
                ColumnKind::DoorOverDrawers,
            ],
            FurnitureType::TvStand => &[
                ColumnKind::SingleDoor,
                ColumnKind::OpenShelf,
                ColumnKind::DrawerStack,
            ],
            FurnitureType::Bedside => &[
                ColumnKind::SingleDoor,
                ColumnKind::OpenShelf,
                ColumnKind::DrawerStack,
            ],
            FurnitureType::OfficeTable => &[
                ColumnKind::OpenShelf,
                ColumnKind::DrawerStack,
                ColumnKind::DoorOverDrawers,
            ],
            FurnitureType::GreenWall => &[ColumnKind::OpenShelf],
            FurnitureType::Storage => &[
                ColumnKind::SingleDoor,
                ColumnKind::DoubleDoor,
                ColumnKind::OpenShelf,
                ColumnKind::DrawerStack,
                ColumnKind::DoorOverDrawers,
                ColumnKind::HangingRail,
            ],
        }
    }

    /// Default column kind for new sections of this furniture type.
    #[must_use]
    pub const fn default_column_kind(furniture_type: FurnitureType) -> ColumnKind {
        match furniture_type {
            FurnitureType::Wardrobe | FurnitureType::Storage | FurnitureType::Bedside => {
                ColumnKind::SingleDoor
            }
            FurnitureType::Stand => ColumnKind::DoubleDoor,
            FurnitureType::TvStand | FurnitureType::GreenWall => ColumnKind::OpenShelf,
            FurnitureType::OfficeTable => ColumnKind::DrawerStack,
        }
    }

    /// Finishes stocked for this furniture type.
    #[must_use]
    pub const fn allowed_finishes(furniture_type: FurnitureType) -> &'static [FinishColor] {
        match furniture_type {
            FurnitureType::Wardrobe | FurnitureType::Stand | FurnitureType::Storage => &[
                FinishColor::White,
                FinishColor::Oak,
                FinishColor::Walnut,
                FinishColor::Graphite,
                FinishColor::Black,
            ],
            FurnitureType::TvStand | FurnitureType::Bedside => &[
                FinishColor::White,
                FinishColor::Oak,
                FinishColor::Walnut,
                FinishColor::Black,
            ],
            FurnitureType::OfficeTable => {
                &[FinishColor::White, FinishColor::Oak, FinishColor::Graphite]
            }
            FurnitureType::GreenWall => {
                &[FinishColor::White, FinishColor::Graphite, FinishColor::Black]
            }
        }
    }

    /// Default finish for this furniture type.
    #[must_use]
    pub const fn default_finish(furniture_type: FurnitureType) -> FinishColor {
        match furniture_type {
            FurnitureType::GreenWall => FinishColor::Graphite,
            _ => FinishColor::White,
        }
    }
}

/// How constraint violations on dimension fields are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    /// Snap out-of-range or off-step values onto the grid, recording an
    /// adjustment
    #[default]
    Clamp,
    /// Keep the value and record a violation
    Reject,
}

/// Kinds of constraint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// Value outside [min,max]
    DimensionOutOfRange,
    /// Value in range but off the step grid
    StepViolation,
    /// Section count outside the type's range
    SectionCountOutOfRange,
    /// Finish not stocked for the furniture type
    FinishNotAvailable,
    /// Column kind not offered for the furniture type
    ColumnKindNotAvailable,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionOutOfRange => write!(f, "Dimension Out of Range"),
            Self::StepViolation => write!(f, "Step Violation"),
            Self::SectionCountOutOfRange => write!(f, "Section Count Out of Range"),
            Self::FinishNotAvailable => write!(f, "Finish Not Available"),
            Self::ColumnKindNotAvailable => write!(f, "Column Kind Not Available"),
        }
    }
}

/// One violated constraint, with the allowed values spelled out for the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Configuration field the violation is on
    pub field: &'static str,
    /// Violation category
    pub kind: ViolationKind,
    /// Human-readable message
    pub message: String,
    /// Allowed values, when they can be named
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<String>,
}

impl Violation {
    fn new(field: &'static str, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
            allowed: None,
        }
    }

    fn with_allowed(mut self, allowed: impl Into<String>) -> Self {
        self.allowed = Some(allowed.into());
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.field, self.kind, self.message)?;
        if let Some(allowed) = &self.allowed {
            write!(f, " (allowed: {allowed})")?;
        }
        Ok(())
    }
}

/// A clamp-mode correction that was applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Adjustment {
    /// Configuration field that was adjusted
    pub field: &'static str,
    /// Value before clamping
    pub from: f32,
    /// Value after clamping
    pub to: f32,
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} adjusted from {} to {}", self.field, self.from, self.to)
    }
}

/// Validation result with blocking violations and non-blocking adjustments.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Violations that prevent the configuration from being applied
    pub violations: Vec<Violation>,
    /// Clamp-mode corrections that were applied
    pub adjustments: Vec<Adjustment>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
            adjustments: Vec::new(),
        }
    }

    /// True when no violations were recorded (adjustments are allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Names of the violated fields, in order of appearance.
    #[must_use]
    pub fn violated_fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }

    /// Formats the report as a user-facing message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();
        if !self.violations.is_empty() {
            message.push_str(&format!("{} violations:\n", self.violations.len()));
            for (idx, violation) in self.violations.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, violation));
            }
        }
        if !self.adjustments.is_empty() {
            message.push_str(&format!("{} adjustments:\n", self.adjustments.len()));
            for (idx, adjustment) in self.adjustments.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, adjustment));
            }
        }
        message
    }
}

/// Outcome of validating a set of dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionOutcome {
    /// The (possibly clamped) dimensions
    pub dimensions: Dimensions,
    /// What was violated or adjusted
    pub report: ValidationReport,
}

/// Validates dimensions against a constraint table.
///
/// Under [`ValidationPolicy::Clamp`] every field is snapped onto its grid
/// and the snap recorded as an adjustment; the result always passes a
/// re-validation, so clamping is idempotent. Under
/// [`ValidationPolicy::Reject`] values are returned unchanged and each
/// out-of-grid field is recorded as a violation naming the allowed range.
#[must_use]
pub fn validate_dimensions(
    dimensions: &Dimensions,
    constraints: &Constraints,
    policy: ValidationPolicy,
) -> DimensionOutcome {
    let mut report = ValidationReport::new();
    let mut result = *dimensions;

    let fields: [(&'static str, f32, DimensionRange, &mut f32); 4] = [
        ("width", dimensions.width, constraints.width, &mut result.width),
        (
            "height",
            dimensions.height,
            constraints.height,
            &mut result.height,
        ),
        ("depth", dimensions.depth, constraints.depth, &mut result.depth),
        (
            "plinth_height",
            dimensions.plinth_height,
            constraints.plinth_height,
            &mut result.plinth_height,
        ),
    ];

    for (field, value, range, slot) in fields {
        if range.contains(value) {
            continue;
        }
        match policy {
            ValidationPolicy::Clamp => {
                let snapped = range.snap(value);
                if (snapped - value).abs() > STEP_EPSILON {
                    report.adjustments.push(Adjustment {
                        field,
                        from: value,
                        to: snapped,
                    });
                }
                *slot = snapped;
            }
            ValidationPolicy::Reject => {
                let kind = if value < range.min || value > range.max {
                    ViolationKind::DimensionOutOfRange
                } else {
                    ViolationKind::StepViolation
                };
                report.violations.push(
                    Violation::new(field, kind, format!("{field} {value} cm is not allowed"))
                        .with_allowed(range.describe()),
                );
            }
        }
    }

    DimensionOutcome {
        dimensions: result,
        report,
    }
}

/// Validates a section count against a constraint table.
///
/// Section counts are never clamped: a silently truncated column list would
/// drop user choices, so out-of-range counts always reject.
#[must_use]
pub fn validate_section_count(count: usize, constraints: &Constraints) -> Option<Violation> {
    if constraints.section_count.contains(count) {
        return None;
    }
    Some(
        Violation::new(
            "selected_sections",
            ViolationKind::SectionCountOutOfRange,
            format!("{count} sections requested"),
        )
        .with_allowed(format!(
            "{}..{} sections",
            constraints.section_count.min, constraints.section_count.max
        )),
    )
}

/// Outcome of validating a whole configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationOutcome {
    /// The (possibly clamped) configuration
    pub configuration: Configuration,
    /// What was violated or adjusted
    pub report: ValidationReport,
}

/// Validates a configuration: dimensions per policy, section count
/// (always rejecting), finish and column-kind availability.
#[must_use]
pub fn validate_configuration(
    configuration: &Configuration,
    policy: ValidationPolicy,
) -> ConfigurationOutcome {
    let constraints = Constraints::for_type(configuration.furniture_type);
    let mut result = configuration.clone();

    let dims = validate_dimensions(&configuration.dimensions, &constraints, policy);
    result.dimensions = dims.dimensions;
    let mut report = dims.report;

    if let Some(violation) = validate_section_count(configuration.selected_sections, &constraints) {
        report.violations.push(violation);
    }

    let finishes = Constraints::allowed_finishes(configuration.furniture_type);
    if !finishes.contains(&configuration.color) {
        report.violations.push(
            Violation::new(
                "color",
                ViolationKind::FinishNotAvailable,
                format!(
                    "finish '{}' is not stocked for {}",
                    configuration.color, configuration.furniture_type
                ),
            )
            .with_allowed(
                finishes
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        );
    }

    let kinds = Constraints::allowed_column_kinds(configuration.furniture_type);
    for (idx, column) in configuration.columns.iter().enumerate() {
        if !kinds.contains(&column.kind) {
            report.violations.push(
                Violation::new(
                    "columns",
                    ViolationKind::ColumnKindNotAvailable,
                    format!(
                        "column {} kind '{}' is not offered for {}",
                        idx + 1,
                        column.kind,
                        configuration.furniture_type
                    ),
                )
                .with_allowed(
                    kinds
                        .iter()
                        .map(|k| k.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
            );
        }
    }

    ConfigurationOutcome {
        configuration: result,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_coherent() {
        for t in FurnitureType::ALL {
            let c = Constraints::for_type(t);
            assert!(c.width.min <= c.width.max);
            assert!(c.height.min <= c.height.max);
            assert!(c.depth.min <= c.depth.max);
            assert!(c.plinth_height.min <= c.plinth_height.max);
            assert!(c.section_count.min >= 1);
            assert!(c.section_count.min <= c.section_count.max);
            assert!(c.min_column_width > 0.0);
            // one column at minimum width must fit into the smallest width
            assert!(
                c.width.min >= c.min_column_width + 2.0 * c.panels.side_panel,
                "{t}: smallest width cannot hold a single column"
            );
            assert!(Constraints::allowed_column_kinds(t)
                .contains(&Constraints::default_column_kind(t)));
            assert!(Constraints::allowed_finishes(t).contains(&Constraints::default_finish(t)));
        }
    }

    #[test]
    fn test_range_contains_and_snap() {
        let range = DimensionRange::new(100.0, 300.0, 5.0);
        assert!(range.contains(100.0));
        assert!(range.contains(150.0));
        assert!(range.contains(300.0));
        assert!(!range.contains(99.0));
        assert!(!range.contains(301.0));
        assert!(!range.contains(152.0));

        assert_eq!(range.snap(99.0), 100.0);
        assert_eq!(range.snap(152.0), 150.0);
        assert_eq!(range.snap(153.0), 155.0);
        assert_eq!(range.snap(400.0), 300.0);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let constraints = Constraints::for_type(FurnitureType::Wardrobe);
        let dims = Dimensions::new(350.0, 173.2, 60.0, 1.0);

        let once = validate_dimensions(&dims, &constraints, ValidationPolicy::Clamp);
        assert!(once.report.is_valid());
        assert!(!once.report.adjustments.is_empty());

        let twice = validate_dimensions(&once.dimensions, &constraints, ValidationPolicy::Clamp);
        assert_eq!(twice.dimensions, once.dimensions);
        assert!(twice.report.adjustments.is_empty());
    }

    #[test]
    fn test_reject_names_allowed_range() {
        let constraints = Constraints::for_type(FurnitureType::Wardrobe);
        let dims = Dimensions::new(350.0, 210.0, 60.0, 5.0);

        let outcome = validate_dimensions(&dims, &constraints, ValidationPolicy::Reject);
        assert!(!outcome.report.is_valid());
        assert_eq!(outcome.dimensions, dims);
        assert_eq!(outcome.report.violated_fields(), vec!["width"]);
        let violation = &outcome.report.violations[0];
        assert_eq!(violation.kind, ViolationKind::DimensionOutOfRange);
        assert_eq!(violation.allowed.as_deref(), Some("100..300 cm in steps of 1 cm"));
    }

    #[test]
    fn test_step_violation_kind() {
        let constraints = Constraints::for_type(FurnitureType::GreenWall);
        let dims = Dimensions::new(115.0, 120.0, 15.0, 0.0);

        let outcome = validate_dimensions(&dims, &constraints, ValidationPolicy::Reject);
        assert_eq!(outcome.report.violations[0].kind, ViolationKind::StepViolation);

        let clamped = validate_dimensions(&dims, &constraints, ValidationPolicy::Clamp);
        assert!(clamped.report.is_valid());
        assert_eq!(clamped.dimensions.width, 120.0);
    }

    #[test]
    fn test_section_count_always_rejects() {
        let constraints = Constraints::for_type(FurnitureType::Stand);
        assert!(validate_section_count(3, &constraints).is_none());
        let violation = validate_section_count(4, &constraints).unwrap();
        assert_eq!(violation.kind, ViolationKind::SectionCountOutOfRange);
        assert_eq!(violation.allowed.as_deref(), Some("1..3 sections"));
    }
}
