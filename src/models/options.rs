//! Hardware options: opening style, door side, hinges, drawer guides.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How doors are opened.
///
/// Determines which hardware imagery is attached to a column's door face.
/// `Push` mounts no visible handle, so no handle asset is rendered for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OpeningType {
    /// Push-to-open, no visible hardware
    #[default]
    Push,
    /// Round knob handle
    RoundHandle,
    /// Full-length profile handle
    ProfileHandle,
}

impl OpeningType {
    /// All opening styles.
    pub const ALL: [OpeningType; 3] = [
        OpeningType::Push,
        OpeningType::RoundHandle,
        OpeningType::ProfileHandle,
    ];

    /// Canonical query/asset tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::RoundHandle => "round-handle",
            Self::ProfileHandle => "profile-handle",
        }
    }

    /// Whether this opening style renders a handle asset.
    #[must_use]
    pub const fn renders_handle(self) -> bool {
        !matches!(self, Self::Push)
    }
}

impl fmt::Display for OpeningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OpeningType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| UnknownTag::new("opening type", s))
    }
}

/// Side towards which a single door opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoorSide {
    /// Hinged on the right, opens to the left
    Left,
    /// Hinged on the left, opens to the right
    Right,
}

impl DoorSide {
    /// Canonical query tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for DoorSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DoorSide {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(UnknownTag::new("door side", other)),
        }
    }
}

/// Door hinge hardware grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HingeType {
    /// Standard clip-on hinges
    #[default]
    Standard,
    /// Damped soft-close hinges
    SoftClose,
}

/// Drawer runner hardware grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DrawerGuides {
    /// Basic roller guides
    #[default]
    Roller,
    /// Ball-bearing full-extension guides
    BallBearing,
    /// Damped soft-close guides
    SoftClose,
}

/// Hardware options attached to a configuration.
///
/// Only `opening` participates in the canonical query encoding; hinge and
/// guide grades are session-local upsells chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FurnitureOptions {
    /// Door opening style
    pub opening: OpeningType,
    /// Hinge grade for all doors
    pub hinges: HingeType,
    /// Guide grade for all drawers
    pub guides: DrawerGuides,
}

/// Error returned when a hardware tag is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag {
    /// What was being parsed (e.g. "opening type")
    pub what: &'static str,
    /// The offending tag as given
    pub given: String,
}

impl UnknownTag {
    pub(crate) fn new(what: &'static str, given: &str) -> Self {
        Self {
            what,
            given: given.to_string(),
        }
    }
}

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.what, self.given)
    }
}

impl std::error::Error for UnknownTag {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_round_trip() {
        for o in OpeningType::ALL {
            assert_eq!(o.as_str().parse::<OpeningType>().unwrap(), o);
        }
    }

    #[test]
    fn test_push_renders_no_handle() {
        assert!(!OpeningType::Push.renders_handle());
        assert!(OpeningType::RoundHandle.renders_handle());
        assert!(OpeningType::ProfileHandle.renders_handle());
    }

    #[test]
    fn test_door_side_parse() {
        assert_eq!("left".parse::<DoorSide>().unwrap(), DoorSide::Left);
        assert_eq!("right".parse::<DoorSide>().unwrap(), DoorSide::Right);
        assert!("up".parse::<DoorSide>().is_err());
    }

    #[test]
    fn test_default_options() {
        let opts = FurnitureOptions::default();
        assert_eq!(opts.opening, OpeningType::Push);
        assert_eq!(opts.hinges, HingeType::Standard);
        assert_eq!(opts.guides, DrawerGuides::Roller);
    }
}
