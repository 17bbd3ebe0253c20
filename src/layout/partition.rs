//! Width partitioning across columns.

use crate::models::FurnitureType;

/// Per-type width ratio overrides, by section count.
///
/// Most types divide the usable width equally; a few have fixed arrangement
/// ratios (the TV stand's wide centre bay, the office table's wide desk
/// side). Absent an entry, partitioning falls back to equal division.
#[must_use]
pub const fn width_ratios(furniture_type: FurnitureType, sections: usize) -> Option<&'static [f32]> {
    match (furniture_type, sections) {
        (FurnitureType::TvStand, 3) => Some(&[1.0, 2.0, 1.0]),
        (FurnitureType::OfficeTable, 2) => Some(&[2.0, 1.0]),
        _ => None,
    }
}

/// Splits a usable width into column slots.
///
/// With `ratios` the slots are proportional; otherwise the division is
/// equal. The slot widths always sum to `usable` exactly up to float
/// arithmetic.
#[must_use]
pub fn partition_usable_width(usable: f32, sections: usize, ratios: Option<&[f32]>) -> Vec<f32> {
    debug_assert!(sections > 0);
    match ratios {
        Some(ratios) => {
            debug_assert_eq!(ratios.len(), sections);
            let total: f32 = ratios.iter().sum();
            ratios.iter().map(|r| usable * r / total).collect()
        }
        None => {
            let slot = usable / sections as f32;
            vec![slot; sections]
        }
    }
}

/// Minimum usable width for `sections` columns at `min_column_width`.
///
/// With ratios the narrowest slot is the binding one: the total must be
/// large enough that the smallest ratio share still reaches the minimum
/// column width.
#[must_use]
pub fn required_usable_width(
    min_column_width: f32,
    sections: usize,
    ratios: Option<&[f32]>,
) -> f32 {
    match ratios {
        Some(ratios) => {
            let total: f32 = ratios.iter().sum();
            let smallest = ratios.iter().copied().fold(f32::INFINITY, f32::min);
            min_column_width * total / smallest
        }
        None => min_column_width * sections as f32,
    }
}
