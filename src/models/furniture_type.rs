//! Furniture product categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level product category.
///
/// The furniture type selects which constraint table, column-kind palette,
/// finish palette, and viewer projection apply. Every consumer matches on it
/// exhaustively, so adding a category is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FurnitureType {
    /// Full-height wardrobe with hinged doors
    Wardrobe,
    /// Low sideboard / chest of drawers
    Stand,
    /// TV lowboard
    TvStand,
    /// Bedside cabinet
    Bedside,
    /// Office table with under-desk cabinets
    OfficeTable,
    /// Vertical planter wall
    #[serde(rename = "greenwall")]
    GreenWall,
    /// Tall utility storage cabinet
    Storage,
}

impl FurnitureType {
    /// All furniture types, in catalog order.
    pub const ALL: [FurnitureType; 7] = [
        FurnitureType::Wardrobe,
        FurnitureType::Stand,
        FurnitureType::TvStand,
        FurnitureType::Bedside,
        FurnitureType::OfficeTable,
        FurnitureType::GreenWall,
        FurnitureType::Storage,
    ];

    /// Canonical query/asset tag for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wardrobe => "wardrobe",
            Self::Stand => "stand",
            Self::TvStand => "tv-stand",
            Self::Bedside => "bedside",
            Self::OfficeTable => "office-table",
            Self::GreenWall => "greenwall",
            Self::Storage => "storage",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wardrobe => "Wardrobe",
            Self::Stand => "Stand",
            Self::TvStand => "TV Stand",
            Self::Bedside => "Bedside Cabinet",
            Self::OfficeTable => "Office Table",
            Self::GreenWall => "Green Wall",
            Self::Storage => "Storage Cabinet",
        }
    }
}

impl fmt::Display for FurnitureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a furniture type tag is not recognized.
///
/// Only reachable at the parse boundary (share links, preset files); inside
/// the engine the type is a closed enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFurnitureType {
    /// The offending tag as given.
    pub given: String,
}

impl fmt::Display for UnknownFurnitureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown furniture type '{}'", self.given)
    }
}

impl std::error::Error for UnknownFurnitureType {}

impl FromStr for FurnitureType {
    type Err = UnknownFurnitureType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownFurnitureType {
                given: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for t in FurnitureType::ALL {
            assert_eq!(t.as_str().parse::<FurnitureType>().unwrap(), t);
        }
    }

    #[test]
    fn test_unknown_tag() {
        let err = "bookcase".parse::<FurnitureType>().unwrap_err();
        assert_eq!(err.given, "bookcase");
        assert!(err.to_string().contains("bookcase"));
    }

    #[test]
    fn test_serde_tags_match_as_str() {
        for t in FurnitureType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }
}
