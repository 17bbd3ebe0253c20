//! Layout derivation: configuration in, per-column geometry out.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constraints::Constraints;
use crate::layout::assets::{handle_asset, AssetCatalog, AssetKey, HeightBucket};
use crate::layout::partition::{partition_usable_width, required_usable_width, width_ratios};
use crate::models::{ColumnConfiguration, Dimensions, DoorSide, FinishColor, FurnitureType, OpeningType};

/// Width-sum comparison tolerance, in centimetres.
const WIDTH_EPSILON: f32 = 1e-3;

/// Geometry of one derived column, left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnGeometry {
    /// Column width
    pub width: f32,
    /// Rendered interior height (overall minus plinth and panels)
    pub height: f32,
    /// Arrangement image ref
    pub arrangement_image: String,
    /// Handle image ref, absent for doorless columns and push openings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_image: Option<String>,
    /// Opening side; present iff the column has exactly one door
    #[serde(skip_serializing_if = "Option::is_none")]
    pub door_opening_side: Option<DoorSide>,
}

/// Derived geometric description of a configuration.
///
/// Never user-authored and never cached across configurations: it is a
/// pure function of the configuration, recomputed on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    /// Column geometries, index-aligned with the configuration's columns
    pub columns: Vec<ColumnGeometry>,
    /// Section count, re-exposed for consumers that read it standalone.
    /// A read-only projection of `columns.len()`, not a second source of
    /// truth.
    pub derived_sections: usize,
}

impl SectionLayout {
    /// Sum of all column widths.
    #[must_use]
    pub fn total_column_width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }
}

/// Why a layout could not be derived.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The overall width cannot hold the requested columns; names the
    /// minimal overall width that would.
    InsufficientWidth {
        /// Requested section count
        sections: usize,
        /// The type's minimum column width
        min_column_width: f32,
        /// Smallest overall width that fits the request
        required_width: f32,
    },
    /// No exact image match in the asset catalog. An engine bug or an
    /// incomplete catalog, surfaced loudly instead of substituting a
    /// wrong image.
    AssetNotFound {
        /// The lookup key that had no entry
        key: AssetKey,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientWidth {
                sections,
                min_column_width,
                required_width,
            } => write!(
                f,
                "width too small for {sections} columns of at least {min_column_width} cm; needs at least {required_width} cm overall"
            ),
            Self::AssetNotFound { key } => write!(f, "no arrangement image for {key}"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Derives the section layout for a validated configuration.
///
/// # Algorithm
///
/// 1. Partition the usable width (overall width minus the two side panels
///    and the dividers between columns) into one slot per column — equal
///    division unless the type has a ratio table for this section count.
/// 2. Per column, resolve the arrangement image by exact catalog match on
///    {type, finish, height bucket, kind, mirror}, and the handle image
///    from the opening style when the column has doors.
/// 3. Column height is the overall height minus plinth and top/bottom
///    panels.
/// 4. The opening side appears in the output iff the column has exactly
///    one door: the caller's side if given, `Left` otherwise.
///
/// # Errors
///
/// [`LayoutError::InsufficientWidth`] when the columns cannot fit, naming
/// the exact minimal overall width; [`LayoutError::AssetNotFound`] on a
/// catalog gap. Section counts beyond the type's range are rejected
/// upstream by validation and are not re-checked here.
pub fn derive_layout(
    furniture_type: FurnitureType,
    dimensions: &Dimensions,
    color: FinishColor,
    opening: OpeningType,
    columns: &[ColumnConfiguration],
    catalog: &AssetCatalog,
) -> Result<SectionLayout, LayoutError> {
    let constraints = Constraints::for_type(furniture_type);
    let panels = constraints.panels;
    let sections = columns.len();
    debug_assert!(sections > 0);

    let fixed = 2.0 * panels.side_panel + (sections as f32 - 1.0) * panels.divider;
    let usable = dimensions.width - fixed;
    let ratios = width_ratios(furniture_type, sections);

    let required_usable = required_usable_width(constraints.min_column_width, sections, ratios);
    if usable + WIDTH_EPSILON < required_usable {
        return Err(LayoutError::InsufficientWidth {
            sections,
            min_column_width: constraints.min_column_width,
            required_width: required_usable + fixed,
        });
    }

    let slots = partition_usable_width(usable, sections, ratios);
    let column_height = dimensions.height
        - dimensions.plinth_height
        - panels.top_panel
        - panels.bottom_panel;
    let bucket = HeightBucket::for_height(dimensions.height);

    let mut geometries = Vec::with_capacity(sections);
    for (column, slot) in columns.iter().zip(slots) {
        let column = column.normalized();
        let meta = column.kind.metadata();

        let key = AssetKey {
            furniture_type,
            color,
            bucket,
            kind: column.kind,
            mirror: column.is_mirrored(),
        };
        let arrangement_image = match catalog.arrangement(&key) {
            Some(path) => path.to_string(),
            None => {
                tracing::error!(key = %key, "arrangement image missing from asset catalog");
                return Err(LayoutError::AssetNotFound { key });
            }
        };

        let opening_image = if meta.door_count > 0 {
            handle_asset(opening, color)
        } else {
            None
        };

        let door_opening_side = if meta.door_count == 1 {
            Some(column.door_opening_side.unwrap_or(DoorSide::Left))
        } else {
            None
        };

        geometries.push(ColumnGeometry {
            width: slot,
            height: column_height,
            arrangement_image,
            opening_image,
            door_opening_side,
        });
    }

    Ok(SectionLayout {
        columns: geometries,
        derived_sections: sections,
    })
}
