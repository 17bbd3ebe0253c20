//! Camera and scene parameters for the 3D presentation layer.
//!
//! Pure per-type lookup; the engine hands the renderer plain numbers and
//! never touches rendering technology itself.

use serde::{Deserialize, Serialize};

use crate::models::FurnitureType;

/// Read-only camera constraints for one furniture type.
///
/// Angles are degrees, distances and targets centimetres. The closed
/// [`FurnitureType`] enum makes an unrecognized type unrepresentable here;
/// links carrying unknown tags are already degraded to a known type at the
/// parse boundary, which is the documented fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Camera distance bounds [min, max]
    pub camera_distance: [f32; 2],
    /// Horizontal orbit bounds [min, max], degrees
    pub azimuth: [f32; 2],
    /// Vertical orbit bounds [min, max], degrees from zenith
    pub polar: [f32; 2],
    /// Orbit target point [x, y, z]
    pub target: [f32; 3],
    /// Backdrop scale factor relative to the piece
    pub background_scale: f32,
}

impl ViewerConfig {
    /// Camera parameters for a furniture type.
    #[must_use]
    pub const fn for_type(furniture_type: FurnitureType) -> Self {
        match furniture_type {
            FurnitureType::Wardrobe => Self {
                camera_distance: [260.0, 620.0],
                azimuth: [-70.0, 70.0],
                polar: [60.0, 95.0],
                target: [0.0, 110.0, 0.0],
                background_scale: 1.6,
            },
            FurnitureType::Stand => Self {
                camera_distance: [160.0, 420.0],
                azimuth: [-75.0, 75.0],
                polar: [55.0, 100.0],
                target: [0.0, 45.0, 0.0],
                background_scale: 1.3,
            },
            FurnitureType::TvStand => Self {
                camera_distance: [180.0, 460.0],
                azimuth: [-75.0, 75.0],
                polar: [55.0, 100.0],
                target: [0.0, 28.0, 0.0],
                background_scale: 1.4,
            },
            FurnitureType::Bedside => Self {
                camera_distance: [90.0, 260.0],
                azimuth: [-80.0, 80.0],
                polar: [50.0, 100.0],
                target: [0.0, 28.0, 0.0],
                background_scale: 1.1,
            },
            FurnitureType::OfficeTable => Self {
                camera_distance: [200.0, 480.0],
                azimuth: [-85.0, 85.0],
                polar: [50.0, 95.0],
                target: [0.0, 40.0, 0.0],
                background_scale: 1.4,
            },
            FurnitureType::GreenWall => Self {
                camera_distance: [160.0, 420.0],
                azimuth: [-55.0, 55.0],
                polar: [70.0, 95.0],
                target: [0.0, 80.0, 0.0],
                background_scale: 1.5,
            },
            FurnitureType::Storage => Self {
                camera_distance: [240.0, 560.0],
                azimuth: [-70.0, 70.0],
                polar: [60.0, 95.0],
                target: [0.0, 100.0, 0.0],
                background_scale: 1.5,
            },
        }
    }

    /// Ground-shadow x offset for a derived overall width.
    ///
    /// The shadow quad is anchored at the left panel, so it shifts by half
    /// the width as the piece grows.
    #[must_use]
    pub fn shadow_offset(derived_width: f32) -> f32 {
        derived_width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_ordered_for_all_types() {
        for t in FurnitureType::ALL {
            let config = ViewerConfig::for_type(t);
            assert!(config.camera_distance[0] < config.camera_distance[1], "{t}");
            assert!(config.azimuth[0] < config.azimuth[1], "{t}");
            assert!(config.polar[0] < config.polar[1], "{t}");
            assert!(config.background_scale >= 1.0, "{t}");
        }
    }

    #[test]
    fn test_shadow_offset_scales_with_width() {
        assert!((ViewerConfig::shadow_offset(150.0) - 75.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_serializes_to_plain_data() {
        let config = ViewerConfig::for_type(FurnitureType::Wardrobe);
        let json = serde_json::to_value(config).unwrap();
        assert!(json["camera_distance"].is_array());
        assert!(json["target"].is_array());
    }
}
