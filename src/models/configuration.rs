//! The root configuration aggregate.

use serde::{Deserialize, Serialize};

use crate::constraints::Constraints;
use crate::models::{
    ColumnConfiguration, Dimensions, FinishColor, FurnitureOptions, FurnitureType,
};
use crate::pricing::Money;

/// One configurator session's authoritative state.
///
/// # Ownership
///
/// Owned exclusively by the [`ConfiguratorStore`](crate::store::ConfiguratorStore)
/// for the duration of a session and mutated only through its update
/// operation. A finalized value copy is handed to the cart adapter; after
/// that point the two copies share nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Product category
    pub furniture_type: FurnitureType,
    /// Overall dimensions in centimetres
    pub dimensions: Dimensions,
    /// Number of vertical sections
    pub selected_sections: usize,
    /// Per-column interior choices, left to right
    pub columns: Vec<ColumnConfiguration>,
    /// Surface finish
    pub color: FinishColor,
    /// Hardware options
    pub options: FurnitureOptions,
    /// Current price; maintained by the store, zero until first derivation
    pub price: Money,
}

impl Configuration {
    /// Creates the type-specific default configuration.
    ///
    /// This is the state a configurator page mounts with. The price is
    /// zero until the store's first update stamps it.
    #[must_use]
    pub fn defaults_for(furniture_type: FurnitureType) -> Self {
        let (dimensions, selected_sections) = match furniture_type {
            FurnitureType::Wardrobe => (Dimensions::new(200.0, 220.0, 60.0, 5.0), 4),
            FurnitureType::Stand => (Dimensions::new(120.0, 80.0, 40.0, 3.0), 2),
            FurnitureType::TvStand => (Dimensions::new(180.0, 45.0, 40.0, 3.0), 3),
            FurnitureType::Bedside => (Dimensions::new(45.0, 50.0, 40.0, 3.0), 1),
            FurnitureType::OfficeTable => (Dimensions::new(160.0, 75.0, 70.0, 0.0), 2),
            FurnitureType::GreenWall => (Dimensions::new(120.0, 120.0, 15.0, 0.0), 2),
            FurnitureType::Storage => (Dimensions::new(160.0, 200.0, 45.0, 5.0), 3),
        };

        let default_kind = Constraints::default_column_kind(furniture_type);
        let columns = vec![ColumnConfiguration::new(default_kind); selected_sections];

        Self {
            furniture_type,
            dimensions,
            selected_sections,
            columns,
            color: Constraints::default_finish(furniture_type),
            options: FurnitureOptions::default(),
            price: Money::zero(),
        }
    }

    /// Resizes the column list to `selected_sections` and normalizes each
    /// column.
    ///
    /// New slots take the type's default kind; surplus columns are dropped
    /// from the right. Unsupported side/mirror choices are cleared.
    pub fn normalize_columns(&mut self) {
        let default_kind = Constraints::default_column_kind(self.furniture_type);
        self.columns
            .resize(self.selected_sections, ColumnConfiguration::new(default_kind));
        for column in &mut self.columns {
            column.normalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{validate_configuration, ValidationPolicy};
    use crate::models::{ColumnKind, DoorSide};

    #[test]
    fn test_defaults_satisfy_constraints() {
        for t in FurnitureType::ALL {
            let config = Configuration::defaults_for(t);
            assert_eq!(config.columns.len(), config.selected_sections);
            let outcome = validate_configuration(&config, ValidationPolicy::Reject);
            assert!(
                outcome.report.is_valid(),
                "defaults for {t} violate constraints: {}",
                outcome.report.format_message()
            );
        }
    }

    #[test]
    fn test_normalize_columns_resizes() {
        let mut config = Configuration::defaults_for(FurnitureType::Wardrobe);
        config.selected_sections = 2;
        config.normalize_columns();
        assert_eq!(config.columns.len(), 2);

        config.selected_sections = 5;
        config.normalize_columns();
        assert_eq!(config.columns.len(), 5);
        assert_eq!(config.columns[4].kind, ColumnKind::SingleDoor);
    }

    #[test]
    fn test_normalize_columns_clears_unsupported() {
        let mut config = Configuration::defaults_for(FurnitureType::Wardrobe);
        config.columns[0] =
            ColumnConfiguration::new(ColumnKind::DoubleDoor).with_door_opening_side(DoorSide::Left);
        config.normalize_columns();
        assert_eq!(config.columns[0].door_opening_side, None);
    }
}
