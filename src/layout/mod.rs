//! Layout derivation: width partitioning, asset lookup, geometry.

pub mod assets;
pub mod deriver;
pub mod partition;

pub use assets::{handle_asset, AssetCatalog, AssetKey, HeightBucket};
pub use deriver::{derive_layout, ColumnGeometry, LayoutError, SectionLayout};
pub use partition::{partition_usable_width, required_usable_width, width_ratios};
