//! Cart line-item snapshots.
//!
//! A line item is a value copy of a finalized configuration: once created
//! it shares no state with the live configurator session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Configuration, Dimensions, FinishColor, FurnitureOptions, FurnitureType};
use crate::pricing::Money;

/// An immutable cart entry for one configured piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Line item id
    pub id: Uuid,
    /// When the item was added to the cart
    pub added_at: DateTime<Utc>,
    /// Product category
    pub furniture_type: FurnitureType,
    /// Display name, e.g. "Wardrobe 200x220x60 cm (plinth 5 cm)"
    pub name: String,
    /// Dimensions at time of adding
    pub dimensions: Dimensions,
    /// Finish at time of adding
    pub color: FinishColor,
    /// Hardware options at time of adding
    pub options: FurnitureOptions,
    /// Derived section count at time of adding
    pub section_count: usize,
    /// Price for one piece
    pub unit_price: Money,
    /// Ordered quantity
    pub quantity: u32,
}

impl CartLineItem {
    /// Snapshots a configuration into a cart line.
    ///
    /// Takes a deep value copy; later edits in the configurator do not
    /// reach the cart.
    #[must_use]
    pub fn from_configuration(config: &Configuration, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            added_at: Utc::now(),
            furniture_type: config.furniture_type,
            name: format!("{} {}", config.furniture_type.label(), config.dimensions),
            dimensions: config.dimensions,
            color: config.color,
            options: config.options,
            section_count: config.selected_sections,
            unit_price: config.price,
            quantity,
        }
    }

    /// Price for the ordered quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}
