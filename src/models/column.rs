//! Column interior layouts and their static metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::options::{DoorSide, UnknownTag};

/// Interior layout of one vertical section.
///
/// The door side is deliberately not baked into the kind; it lives in
/// [`ColumnConfiguration::door_opening_side`] so a column cannot carry two
/// contradictory side choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKind {
    /// One hinged door over shelves
    SingleDoor,
    /// Two hinged doors over shelves
    DoubleDoor,
    /// Open shelving, no front
    OpenShelf,
    /// Full stack of drawers
    DrawerStack,
    /// One door above a drawer block
    DoorOverDrawers,
    /// Open hanging rail (wardrobe interior)
    HangingRail,
}

/// Static facts about a column kind.
///
/// Derived once from the kind tag; never hand-edited per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationMetadata {
    /// Number of doors on the column front (0, 1, or 2)
    pub door_count: u8,
    /// Whether the interior arrangement has a mirrored variant
    pub supports_mirror: bool,
    /// Whether a door-opening-side choice is meaningful
    pub supports_door_opening_side: bool,
}

impl ColumnKind {
    /// All column kinds, in catalog order.
    pub const ALL: [ColumnKind; 6] = [
        ColumnKind::SingleDoor,
        ColumnKind::DoubleDoor,
        ColumnKind::OpenShelf,
        ColumnKind::DrawerStack,
        ColumnKind::DoorOverDrawers,
        ColumnKind::HangingRail,
    ];

    /// Static metadata for this kind.
    ///
    /// Total over the closed enum: every registered kind has a record, and
    /// an unregistered kind cannot be represented.
    #[must_use]
    pub const fn metadata(self) -> ConfigurationMetadata {
        match self {
            Self::SingleDoor => ConfigurationMetadata {
                door_count: 1,
                supports_mirror: true,
                supports_door_opening_side: true,
            },
            Self::DoubleDoor => ConfigurationMetadata {
                door_count: 2,
                supports_mirror: false,
                supports_door_opening_side: false,
            },
            Self::OpenShelf => ConfigurationMetadata {
                door_count: 0,
                supports_mirror: true,
                supports_door_opening_side: false,
            },
            Self::DrawerStack => ConfigurationMetadata {
                door_count: 0,
                supports_mirror: false,
                supports_door_opening_side: false,
            },
            Self::DoorOverDrawers => ConfigurationMetadata {
                door_count: 1,
                supports_mirror: true,
                supports_door_opening_side: true,
            },
            Self::HangingRail => ConfigurationMetadata {
                door_count: 0,
                supports_mirror: false,
                supports_door_opening_side: false,
            },
        }
    }

    /// Whether this kind fronts any drawers (affects guide hardware pricing).
    #[must_use]
    pub const fn has_drawers(self) -> bool {
        matches!(self, Self::DrawerStack | Self::DoorOverDrawers)
    }

    /// Canonical query/asset tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleDoor => "single-door",
            Self::DoubleDoor => "double-door",
            Self::OpenShelf => "open-shelf",
            Self::DrawerStack => "drawer-stack",
            Self::DoorOverDrawers => "door-over-drawers",
            Self::HangingRail => "hanging-rail",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnKind {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownTag::new("column kind", s))
    }
}

/// One user-chosen column.
///
/// # Invariants
///
/// `door_opening_side` is meaningful only when the kind's metadata reports
/// exactly one door; `mirror` only when the kind supports mirroring. Setting
/// either field on an unsupporting kind is silently ignored:
/// [`ColumnConfiguration::normalize`] clears it, and every engine entry
/// point (store update, query parse, preset load) normalizes before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfiguration {
    /// Interior layout kind
    pub kind: ColumnKind,
    /// Opening side for single-door kinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub door_opening_side: Option<DoorSide>,
    /// Mirrored interior arrangement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror: Option<bool>,
}

impl ColumnConfiguration {
    /// Creates a column of the given kind with no optional choices.
    #[must_use]
    pub const fn new(kind: ColumnKind) -> Self {
        Self {
            kind,
            door_opening_side: None,
            mirror: None,
        }
    }

    /// Sets the door opening side.
    #[must_use]
    pub const fn with_door_opening_side(mut self, side: DoorSide) -> Self {
        self.door_opening_side = Some(side);
        self
    }

    /// Sets the mirror flag.
    #[must_use]
    pub const fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = Some(mirror);
        self
    }

    /// Clears optional fields the kind's metadata does not support.
    pub fn normalize(&mut self) {
        let meta = self.kind.metadata();
        if meta.door_count != 1 || !meta.supports_door_opening_side {
            self.door_opening_side = None;
        }
        if !meta.supports_mirror {
            self.mirror = None;
        }
    }

    /// Returns the normalized copy of this column.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Whether the interior is rendered mirrored.
    #[must_use]
    pub fn is_mirrored(&self) -> bool {
        self.mirror.unwrap_or(false) && self.kind.metadata().supports_mirror
    }
}
