//! Overall furniture dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall dimensions of a configured piece, in centimetres.
///
/// # Validation
///
/// Each field must lie within the active furniture type's range and step
/// grid (see `constraints`). Width additionally bounds how many columns the
/// piece can carry, at the type's minimum column width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Overall width
    pub width: f32,
    /// Overall height including plinth
    pub height: f32,
    /// Overall depth
    pub depth: f32,
    /// Plinth height (zero for plinthless types)
    pub plinth_height: f32,
}

impl Dimensions {
    /// Creates dimensions from centimetre values.
    #[must_use]
    pub const fn new(width: f32, height: f32, depth: f32, plinth_height: f32) -> Self {
        Self {
            width,
            height,
            depth,
            plinth_height,
        }
    }

    /// Front façade area in square centimetres.
    #[must_use]
    pub fn facade_area(&self) -> f32 {
        self.width * self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}x{} cm (plinth {} cm)",
            self.width, self.height, self.depth, self.plinth_height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_area() {
        let d = Dimensions::new(200.0, 220.0, 60.0, 5.0);
        assert!((d.facade_area() - 44_000.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_display() {
        let d = Dimensions::new(150.0, 210.0, 60.0, 5.0);
        assert_eq!(d.to_string(), "150x210x60 cm (plinth 5 cm)");
    }
}
