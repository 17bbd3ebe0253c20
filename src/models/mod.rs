//! Data models for furniture configurations.
//!
//! This module contains the core domain types used throughout the engine.
//! Models are designed to be independent of rendering and storefront logic.

pub mod color;
pub mod column;
pub mod configuration;
pub mod dimensions;
pub mod furniture_type;
pub mod options;

// Re-export all model types
pub use color::FinishColor;
pub use column::{ColumnConfiguration, ColumnKind, ConfigurationMetadata};
pub use configuration::Configuration;
pub use dimensions::Dimensions;
pub use furniture_type::{FurnitureType, UnknownFurnitureType};
pub use options::{DoorSide, DrawerGuides, FurnitureOptions, HingeType, OpeningType, UnknownTag};
