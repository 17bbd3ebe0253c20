//! Surface finishes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::options::UnknownTag;

/// Surface finish of all visible panels.
///
/// Not every finish is stocked for every furniture type; availability is
/// part of the per-type constraint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinishColor {
    /// Matte white laminate
    White,
    /// Oak veneer
    Oak,
    /// Walnut veneer
    Walnut,
    /// Dark grey laminate
    Graphite,
    /// Matte black laminate
    Black,
}

impl FinishColor {
    /// All finishes, in catalog order.
    pub const ALL: [FinishColor; 5] = [
        FinishColor::White,
        FinishColor::Oak,
        FinishColor::Walnut,
        FinishColor::Graphite,
        FinishColor::Black,
    ];

    /// Canonical query/asset tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Oak => "oak",
            Self::Walnut => "walnut",
            Self::Graphite => "graphite",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for FinishColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FinishColor {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownTag::new("finish", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_round_trip() {
        for c in FinishColor::ALL {
            assert_eq!(c.as_str().parse::<FinishColor>().unwrap(), c);
        }
    }

    #[test]
    fn test_unknown_finish() {
        let err = "chrome".parse::<FinishColor>().unwrap_err();
        assert_eq!(err.given, "chrome");
    }
}
