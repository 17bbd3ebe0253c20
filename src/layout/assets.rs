//! Arrangement and hardware imagery lookup.
//!
//! The catalog is a plain table built once at startup and read-only
//! afterwards; preloading the underlying images is the renderer's concern,
//! not the engine's. Lookups are exact-match: a missing entry is surfaced
//! as an error, never papered over with a near-miss image.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::constraints::Constraints;
use crate::models::{ColumnKind, FinishColor, FurnitureType, OpeningType};

/// Height class used to pick arrangement imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeightBucket {
    /// Below 100 cm
    Low,
    /// 100 cm up to (excluding) 200 cm
    Mid,
    /// 200 cm and above
    Tall,
}

impl HeightBucket {
    /// All buckets, low to tall.
    pub const ALL: [HeightBucket; 3] = [HeightBucket::Low, HeightBucket::Mid, HeightBucket::Tall];

    /// Bucket for an overall height in centimetres.
    #[must_use]
    pub fn for_height(height: f32) -> Self {
        if height < 100.0 {
            Self::Low
        } else if height < 200.0 {
            Self::Mid
        } else {
            Self::Tall
        }
    }

    /// Canonical asset-path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::Tall => "tall",
        }
    }

    /// Buckets a height range can reach.
    fn spanned_by(min: f32, max: f32) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|bucket| match bucket {
                Self::Low => min < 100.0,
                Self::Mid => max >= 100.0 && min < 200.0,
                Self::Tall => max >= 200.0,
            })
            .collect()
    }
}

impl fmt::Display for HeightBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exact lookup key for one column's arrangement image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetKey {
    /// Product category
    pub furniture_type: FurnitureType,
    /// Surface finish
    pub color: FinishColor,
    /// Height class of the overall piece
    pub bucket: HeightBucket,
    /// Column interior kind
    pub kind: ColumnKind,
    /// Mirrored arrangement variant
    pub mirror: bool,
}

impl AssetKey {
    /// Canonical asset path for this key.
    #[must_use]
    pub fn asset_path(&self) -> String {
        let mirror = if self.mirror { "-mirrored" } else { "" };
        format!(
            "{}/{}/{}/{}{}.webp",
            self.furniture_type, self.color, self.bucket, self.kind, mirror
        )
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}, {}, {}, {}, mirror={}}}",
            self.furniture_type, self.color, self.bucket, self.kind, self.mirror
        )
    }
}

/// Arrangement-image lookup table.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    arrangements: HashMap<AssetKey, String>,
}

impl AssetCatalog {
    /// Builds the standard catalog covering every sellable combination:
    /// each type's stocked finishes, reachable height buckets, offered
    /// column kinds, and mirror variants where supported.
    #[must_use]
    pub fn standard() -> Self {
        let mut arrangements = HashMap::new();
        for key in FurnitureType::ALL.iter().flat_map(|t| Self::expected_keys(*t)) {
            arrangements.insert(key, key.asset_path());
        }
        Self { arrangements }
    }

    /// Builds a catalog from explicit entries (tests, partial deployments).
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (AssetKey, String)>) -> Self {
        Self {
            arrangements: entries.into_iter().collect(),
        }
    }

    /// Every key the standard catalog is expected to cover for a type.
    #[must_use]
    pub fn expected_keys(furniture_type: FurnitureType) -> Vec<AssetKey> {
        let constraints = Constraints::for_type(furniture_type);
        let buckets =
            HeightBucket::spanned_by(constraints.height.min, constraints.height.max);
        let mut keys = Vec::new();
        for &color in Constraints::allowed_finishes(furniture_type) {
            for &bucket in &buckets {
                for &kind in Constraints::allowed_column_kinds(furniture_type) {
                    keys.push(AssetKey {
                        furniture_type,
                        color,
                        bucket,
                        kind,
                        mirror: false,
                    });
                    if kind.metadata().supports_mirror {
                        keys.push(AssetKey {
                            furniture_type,
                            color,
                            bucket,
                            kind,
                            mirror: true,
                        });
                    }
                }
            }
        }
        keys
    }

    /// Exact-match arrangement lookup.
    #[must_use]
    pub fn arrangement(&self, key: &AssetKey) -> Option<&str> {
        self.arrangements.get(key).map(String::as_str)
    }

    /// Removes an entry, returning the previous image ref.
    pub fn remove(&mut self, key: &AssetKey) -> Option<String> {
        self.arrangements.remove(key)
    }

    /// Expected keys with no catalog entry, across all types.
    #[must_use]
    pub fn missing(&self) -> Vec<AssetKey> {
        FurnitureType::ALL
            .iter()
            .flat_map(|t| Self::expected_keys(*t))
            .filter(|key| !self.arrangements.contains_key(key))
            .collect()
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arrangements.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arrangements.is_empty()
    }
}

/// Handle asset for a door face, if the opening style renders one.
#[must_use]
pub fn handle_asset(opening: OpeningType, color: FinishColor) -> Option<String> {
    opening
        .renders_handle()
        .then(|| format!("hardware/{}-{}.webp", opening, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_for_height() {
        assert_eq!(HeightBucket::for_height(45.0), HeightBucket::Low);
        assert_eq!(HeightBucket::for_height(100.0), HeightBucket::Mid);
        assert_eq!(HeightBucket::for_height(199.9), HeightBucket::Mid);
        assert_eq!(HeightBucket::for_height(200.0), HeightBucket::Tall);
    }

    #[test]
    fn test_standard_catalog_is_complete() {
        let catalog = AssetCatalog::standard();
        assert!(!catalog.is_empty());
        assert!(catalog.missing().is_empty());
    }

    #[test]
    fn test_exact_lookup() {
        let catalog = AssetCatalog::standard();
        let key = AssetKey {
            furniture_type: FurnitureType::Wardrobe,
            color: FinishColor::Oak,
            bucket: HeightBucket::Tall,
            kind: ColumnKind::SingleDoor,
            mirror: true,
        };
        assert_eq!(
            catalog.arrangement(&key),
            Some("wardrobe/oak/tall/single-door-mirrored.webp")
        );
    }

    #[test]
    fn test_missing_after_removal() {
        let mut catalog = AssetCatalog::standard();
        let key = AssetKey {
            furniture_type: FurnitureType::Stand,
            color: FinishColor::Black,
            bucket: HeightBucket::Low,
            kind: ColumnKind::DoubleDoor,
            mirror: false,
        };
        assert!(catalog.remove(&key).is_some());
        assert_eq!(catalog.arrangement(&key), None);
        assert_eq!(catalog.missing(), vec![key]);
    }

    #[test]
    fn test_no_mirror_keys_for_unsupporting_kinds() {
        for key in AssetCatalog::expected_keys(FurnitureType::Wardrobe) {
            if key.mirror {
                assert!(key.kind.metadata().supports_mirror);
            }
        }
    }

    #[test]
    fn test_handle_asset() {
        assert_eq!(handle_asset(OpeningType::Push, FinishColor::Oak), None);
        assert_eq!(
            handle_asset(OpeningType::RoundHandle, FinishColor::Black).as_deref(),
            Some("hardware/round-handle-black.webp")
        );
    }
}
