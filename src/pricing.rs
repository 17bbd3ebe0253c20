//! Deterministic price model.
//!
//! Prices are integer euro cents end to end; the only float involved is the
//! façade area, rounded once before entering the integer math.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::models::{ColumnKind, Configuration, DrawerGuides, FinishColor, FurnitureType, HingeType, OpeningType};

/// An amount of money in euro cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Zero euros.
    #[must_use]
    pub const fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Creates an amount from euro cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// The amount in euro cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.cents
    }

    /// Multiplies the amount by a quantity.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self {
            cents: self.cents * quantity as i64,
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            cents: self.cents + rhs.cents,
        }
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02} €", self.cents / 100, (self.cents % 100).abs())
    }
}

/// Base price per furniture type, before columns and options.
const fn base_price(furniture_type: FurnitureType) -> Money {
    Money::from_cents(match furniture_type {
        FurnitureType::Wardrobe => 49_900,
        FurnitureType::Stand => 24_900,
        FurnitureType::TvStand => 21_900,
        FurnitureType::Bedside => 11_900,
        FurnitureType::OfficeTable => 38_900,
        FurnitureType::GreenWall => 18_900,
        FurnitureType::Storage => 32_900,
    })
}

/// Add-on per column, by interior kind.
const fn column_price(kind: ColumnKind) -> Money {
    Money::from_cents(match kind {
        ColumnKind::SingleDoor => 4_500,
        ColumnKind::DoubleDoor => 6_900,
        ColumnKind::OpenShelf => 1_900,
        ColumnKind::DrawerStack => 8_900,
        ColumnKind::DoorOverDrawers => 7_900,
        ColumnKind::HangingRail => 2_400,
    })
}

/// Surcharge on the carcass subtotal, in percent, by finish.
const fn finish_surcharge_percent(color: FinishColor) -> i64 {
    match color {
        FinishColor::White => 0,
        FinishColor::Oak => 12,
        FinishColor::Walnut => 20,
        FinishColor::Graphite => 8,
        FinishColor::Black => 10,
    }
}

/// Handle hardware per door.
const fn opening_price_per_door(opening: OpeningType) -> Money {
    Money::from_cents(match opening {
        OpeningType::Push => 0,
        OpeningType::RoundHandle => 900,
        OpeningType::ProfileHandle => 1_400,
    })
}

/// Material rate per started 1000 cm² of façade.
const fn area_rate(furniture_type: FurnitureType) -> Money {
    Money::from_cents(match furniture_type {
        FurnitureType::Wardrobe => 300,
        FurnitureType::Stand | FurnitureType::TvStand => 250,
        FurnitureType::Bedside => 200,
        FurnitureType::OfficeTable => 350,
        FurnitureType::GreenWall => 220,
        FurnitureType::Storage => 280,
    })
}

/// Computes the price of a configuration.
///
/// Carcass (base + columns) with the finish surcharge, plus door and drawer
/// hardware, plus a façade-area material term. Pure; recomputed by the
/// store on every committed update.
#[must_use]
pub fn price_of(config: &Configuration) -> Money {
    let mut carcass = base_price(config.furniture_type);
    for column in &config.columns {
        carcass += column_price(column.kind);
    }

    let surcharge = Money::from_cents(
        carcass.cents() * finish_surcharge_percent(config.color) / 100,
    );

    let doors: u32 = config
        .columns
        .iter()
        .map(|c| u32::from(c.kind.metadata().door_count))
        .sum();
    let drawer_columns = config.columns.iter().filter(|c| c.kind.has_drawers()).count() as u32;

    let mut hardware = opening_price_per_door(config.options.opening).times(doors);
    if config.options.hinges == HingeType::SoftClose {
        hardware += Money::from_cents(600).times(doors);
    }
    hardware += match config.options.guides {
        DrawerGuides::Roller => Money::zero(),
        DrawerGuides::BallBearing => Money::from_cents(1_200).times(drawer_columns),
        DrawerGuides::SoftClose => Money::from_cents(1_800).times(drawer_columns),
    };

    let area_cm2 = config.dimensions.facade_area().round() as i64;
    let area_blocks = (area_cm2 + 999) / 1000;
    let area = Money::from_cents(area_rate(config.furniture_type).cents() * area_blocks);

    carcass + surcharge + hardware + area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FurnitureOptions;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(123_456).to_string(), "1234.56 €");
        assert_eq!(Money::from_cents(500).to_string(), "5.00 €");
        assert_eq!(Money::zero().to_string(), "0.00 €");
    }

    #[test]
    fn test_price_is_deterministic() {
        let config = Configuration::defaults_for(FurnitureType::Wardrobe);
        assert_eq!(price_of(&config), price_of(&config));
        assert!(price_of(&config) > Money::zero());
    }

    #[test]
    fn test_finish_surcharge_raises_price() {
        let mut white = Configuration::defaults_for(FurnitureType::Wardrobe);
        white.color = FinishColor::White;
        let mut walnut = white.clone();
        walnut.color = FinishColor::Walnut;
        assert!(price_of(&walnut) > price_of(&white));
    }

    #[test]
    fn test_handles_priced_per_door() {
        let mut config = Configuration::defaults_for(FurnitureType::Wardrobe);
        config.options = FurnitureOptions {
            opening: OpeningType::Push,
            ..FurnitureOptions::default()
        };
        let push = price_of(&config);

        config.options.opening = OpeningType::RoundHandle;
        let handles = price_of(&config);

        // 4 default single-door columns -> 4 doors
        assert_eq!(handles.cents() - push.cents(), 4 * 900);
    }
}
