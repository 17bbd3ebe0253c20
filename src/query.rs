//! Canonical query-string encoding of a configuration.
//!
//! The encoding is the shareable-link representation: a flat `key=value`
//! sequence covering furniture type, dimensions, section count, per-column
//! choices, finish, and opening style. All values are plain ASCII tokens
//! (kebab-case tags and decimal numbers), so no percent escaping is needed.
//!
//! Parsing never fails wholesale: every malformed or stale field degrades
//! to the furniture type's default and is recorded as an issue, so an old
//! link still opens a working configurator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::constraints::Constraints;
use crate::models::{
    ColumnKind, Configuration, DoorSide, FinishColor, FurnitureType, OpeningType,
};

/// Category of a degraded query field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryIssueKind {
    /// The `type` tag was not a known furniture type
    UnknownFurnitureType,
    /// A segment was not a `key=value` pair
    MalformedPair,
    /// A value failed to parse for its key
    InvalidValue,
    /// A column kind tag was unknown
    UnknownColumnKind,
    /// A column kind is not offered for the furniture type
    ColumnKindNotOffered,
    /// A finish is not stocked for the furniture type
    FinishNotAvailable,
    /// A key the canonical encoding does not define
    UnknownKey,
    /// A value parsed but violated the type's constraints
    OutOfRange,
}

impl fmt::Display for QueryIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFurnitureType => write!(f, "unknown furniture type"),
            Self::MalformedPair => write!(f, "malformed pair"),
            Self::InvalidValue => write!(f, "invalid value"),
            Self::UnknownColumnKind => write!(f, "unknown column kind"),
            Self::ColumnKindNotOffered => write!(f, "column kind not offered"),
            Self::FinishNotAvailable => write!(f, "finish not available"),
            Self::UnknownKey => write!(f, "unknown key"),
            Self::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// One query field that was degraded to a default during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryIssue {
    /// The key, as it appeared in the query
    pub key: String,
    /// The offending value
    pub given: String,
    /// What was wrong with it
    pub kind: QueryIssueKind,
}

impl fmt::Display for QueryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} '{}'", self.key, self.kind, self.given)
    }
}

/// Result of parsing a query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    /// The reconstructed configuration, with degraded fields at defaults
    pub configuration: Configuration,
    /// Fields that did not survive parsing
    pub issues: Vec<QueryIssue>,
}

/// Serializes the canonical subset of a configuration.
///
/// Fixed key order: `type,w,h,d,ph,sections,color,opening`, then `c{i}`,
/// `side{i}`, `mirror{i}` per column. Optional per-column fields are
/// omitted when unset, so `parse(serialize(c)) == c` for any
/// constraint-satisfying `c`.
#[must_use]
pub fn serialize(config: &Configuration) -> String {
    let mut pairs: Vec<String> = vec![
        format!("type={}", config.furniture_type),
        format!("w={}", config.dimensions.width),
        format!("h={}", config.dimensions.height),
        format!("d={}", config.dimensions.depth),
        format!("ph={}", config.dimensions.plinth_height),
        format!("sections={}", config.selected_sections),
        format!("color={}", config.color),
        format!("opening={}", config.options.opening),
    ];

    for (idx, column) in config.columns.iter().enumerate() {
        pairs.push(format!("c{idx}={}", column.kind));
        if let Some(side) = column.door_opening_side {
            pairs.push(format!("side{idx}={side}"));
        }
        if let Some(mirror) = column.mirror {
            pairs.push(format!("mirror{idx}={}", u8::from(mirror)));
        }
    }

    pairs.join("&")
}

/// Parses a query string back into a configuration.
///
/// Runs field by field against the furniture type's defaults; every issue
/// is recorded and logged, none aborts the parse. Range and step checks are
/// not performed here — the store pushes the parsed configuration through
/// the same validation path as a user edit.
#[must_use]
pub fn parse(query: &str) -> ParsedQuery {
    let mut issues = Vec::new();
    let mut pairs = BTreeMap::new();

    for segment in query.split('&').filter(|s| !s.is_empty()) {
        match segment.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                pairs.insert(key.to_string(), value.to_string());
            }
            _ => issues.push(QueryIssue {
                key: segment.to_string(),
                given: String::new(),
                kind: QueryIssueKind::MalformedPair,
            }),
        }
    }

    let furniture_type = match pairs.remove("type") {
        Some(tag) => tag.parse::<FurnitureType>().unwrap_or_else(|_| {
            issues.push(QueryIssue {
                key: "type".to_string(),
                given: tag,
                kind: QueryIssueKind::UnknownFurnitureType,
            });
            FurnitureType::Wardrobe
        }),
        None => FurnitureType::Wardrobe,
    };

    let mut config = Configuration::defaults_for(furniture_type);

    let mut take_cm = |key: &str, slot: &mut f32, issues: &mut Vec<QueryIssue>| {
        if let Some(value) = pairs.remove(key) {
            match value.parse::<f32>() {
                Ok(parsed) if parsed.is_finite() && parsed >= 0.0 => *slot = parsed,
                _ => issues.push(QueryIssue {
                    key: key.to_string(),
                    given: value,
                    kind: QueryIssueKind::InvalidValue,
                }),
            }
        }
    };
    take_cm("w", &mut config.dimensions.width, &mut issues);
    take_cm("h", &mut config.dimensions.height, &mut issues);
    take_cm("d", &mut config.dimensions.depth, &mut issues);
    take_cm("ph", &mut config.dimensions.plinth_height, &mut issues);

    if let Some(value) = pairs.remove("sections") {
        match value.parse::<usize>() {
            Ok(parsed) if parsed >= 1 => config.selected_sections = parsed,
            _ => issues.push(QueryIssue {
                key: "sections".to_string(),
                given: value,
                kind: QueryIssueKind::InvalidValue,
            }),
        }
    }

    if let Some(value) = pairs.remove("color") {
        match value.parse::<FinishColor>() {
            Ok(color) if Constraints::allowed_finishes(furniture_type).contains(&color) => {
                config.color = color;
            }
            Ok(_) => issues.push(QueryIssue {
                key: "color".to_string(),
                given: value,
                kind: QueryIssueKind::FinishNotAvailable,
            }),
            Err(_) => issues.push(QueryIssue {
                key: "color".to_string(),
                given: value,
                kind: QueryIssueKind::InvalidValue,
            }),
        }
    }

    if let Some(value) = pairs.remove("opening") {
        match value.parse::<OpeningType>() {
            Ok(opening) => config.options.opening = opening,
            Err(_) => issues.push(QueryIssue {
                key: "opening".to_string(),
                given: value,
                kind: QueryIssueKind::InvalidValue,
            }),
        }
    }

    config.normalize_columns();
    let offered = Constraints::allowed_column_kinds(furniture_type);
    for idx in 0..config.selected_sections {
        if let Some(value) = pairs.remove(&format!("c{idx}")) {
            match value.parse::<ColumnKind>() {
                Ok(kind) if offered.contains(&kind) => config.columns[idx].kind = kind,
                Ok(_) => issues.push(QueryIssue {
                    key: format!("c{idx}"),
                    given: value,
                    kind: QueryIssueKind::ColumnKindNotOffered,
                }),
                Err(_) => issues.push(QueryIssue {
                    key: format!("c{idx}"),
                    given: value,
                    kind: QueryIssueKind::UnknownColumnKind,
                }),
            }
        }
        if let Some(value) = pairs.remove(&format!("side{idx}")) {
            match value.parse::<DoorSide>() {
                Ok(side) => config.columns[idx].door_opening_side = Some(side),
                Err(_) => issues.push(QueryIssue {
                    key: format!("side{idx}"),
                    given: value,
                    kind: QueryIssueKind::InvalidValue,
                }),
            }
        }
        if let Some(value) = pairs.remove(&format!("mirror{idx}")) {
            match value.as_str() {
                "1" | "true" => config.columns[idx].mirror = Some(true),
                "0" | "false" => config.columns[idx].mirror = Some(false),
                _ => issues.push(QueryIssue {
                    key: format!("mirror{idx}"),
                    given: value,
                    kind: QueryIssueKind::InvalidValue,
                }),
            }
        }
        config.columns[idx].normalize();
    }

    for (key, value) in pairs {
        issues.push(QueryIssue {
            key,
            given: value,
            kind: QueryIssueKind::UnknownKey,
        });
    }

    for issue in &issues {
        tracing::warn!(key = %issue.key, kind = %issue.kind, "degraded query field");
    }

    ParsedQuery {
        configuration: config,
        issues,
    }
}
