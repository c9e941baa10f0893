//! Per-line classification rules.
//!
//! Each line resolves to one [`LineTopologyRule`]. Lines missing from the
//! table are classified with [`LineTopologyRule::Default`].

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{LineId, Segment, StationCode};

/// Errors loading or validating a rule table.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Rule file could not be read
    #[error("failed to read rule table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Rule file is not valid JSON for a rule table
    #[error("invalid rule table: {0}")]
    Json(#[from] serde_json::Error),

    /// A predicate station set is empty, so it could never match
    #[error("line {line}: {what} has no stations")]
    EmptyStationSet { line: LineId, what: &'static str },
}

/// A short spur branch hanging off a loop line.
///
/// Segments with both endpoints in `stations` belong to the spur. Spur edges
/// are emitted under `label` rather than the host line, so each spur forms
/// its own adjacency group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpurBranch {
    pub label: LineId,
    pub stations: BTreeSet<StationCode>,
}

impl SpurBranch {
    /// Check whether a segment lies on this spur.
    pub fn contains(&self, segment: &Segment) -> bool {
        self.stations.contains(&segment.a) && self.stations.contains(&segment.b)
    }
}

/// How a line's segments become directed edges.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineTopologyRule {
    /// `a → b` is down, `b → a` is up.
    #[default]
    Default,

    /// Circular line. Non-spur segments give `a → b` up (inner ring) and
    /// `b → a` down (outer ring); spur segments give a single `a → b` edge.
    Loop {
        #[serde(default)]
        spurs: Vec<SpurBranch>,
    },

    /// Line with a one-way loop section. Segments inside the section only
    /// get a down edge `a → b`; the rest follow the default rule.
    PartialLoop { loop_section: BTreeSet<StationCode> },
}

impl LineTopologyRule {
    /// The spur a segment belongs to, if this is a loop line.
    pub fn spur_for(&self, segment: &Segment) -> Option<&SpurBranch> {
        match self {
            LineTopologyRule::Loop { spurs } => spurs.iter().find(|s| s.contains(segment)),
            _ => None,
        }
    }

    /// Check whether a segment lies on the one-way loop section.
    pub fn in_loop_section(&self, segment: &Segment) -> bool {
        match self {
            LineTopologyRule::PartialLoop { loop_section } => {
                loop_section.contains(&segment.a) && loop_section.contains(&segment.b)
            }
            _ => false,
        }
    }

    /// Whether this rule has a predicate that a segment can match.
    pub fn has_predicates(&self) -> bool {
        match self {
            LineTopologyRule::Default => false,
            LineTopologyRule::Loop { spurs } => !spurs.is_empty(),
            LineTopologyRule::PartialLoop { .. } => true,
        }
    }

    fn validate(&self, line: &LineId) -> Result<(), RuleError> {
        match self {
            LineTopologyRule::Default => Ok(()),
            LineTopologyRule::Loop { spurs } => {
                if spurs.iter().any(|s| s.stations.is_empty()) {
                    return Err(RuleError::EmptyStationSet {
                        line: line.clone(),
                        what: "spur branch",
                    });
                }
                Ok(())
            }
            LineTopologyRule::PartialLoop { loop_section } => {
                if loop_section.is_empty() {
                    return Err(RuleError::EmptyStationSet {
                        line: line.clone(),
                        what: "loop section",
                    });
                }
                Ok(())
            }
        }
    }
}

/// Static rule table mapping lines to their classification behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: HashMap<LineId, LineTopologyRule>,
}

static DEFAULT_RULE: LineTopologyRule = LineTopologyRule::Default;

impl RuleTable {
    /// Create an empty table (every line uses the default rule).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule for a line, replacing any previous one.
    pub fn insert(&mut self, line: LineId, rule: LineTopologyRule) {
        self.rules.insert(line, rule);
    }

    /// Resolve the rule for a line.
    pub fn rule_for(&self, line: &LineId) -> &LineTopologyRule {
        self.rules.get(line).unwrap_or(&DEFAULT_RULE)
    }

    /// Check whether a line has an explicit entry.
    pub fn is_configured(&self, line: &LineId) -> bool {
        self.rules.contains_key(line)
    }

    /// Lines with explicit entries.
    pub fn lines(&self) -> impl Iterator<Item = (&LineId, &LineTopologyRule)> {
        self.rules.iter()
    }

    /// Host line of a spur label, e.g. `2호선` for `2호선(성수지선)`.
    pub fn host_line(&self, label: &LineId) -> Option<&LineId> {
        self.rules.iter().find_map(|(line, rule)| match rule {
            LineTopologyRule::Loop { spurs } if spurs.iter().any(|s| &s.label == label) => {
                Some(line)
            }
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Parse and validate a table from JSON.
    ///
    /// The shape is a map from line identifier to a tagged rule:
    ///
    /// ```json
    /// { "6호선": { "kind": "partial_loop", "loop_section": ["610", "611"] } }
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, RuleError> {
        let table: RuleTable = serde_json::from_str(json)?;
        for (line, rule) in &table.rules {
            rule.validate(line)?;
        }
        Ok(table)
    }

    /// Read a table from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RuleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Built-in rules for the Seoul metropolitan subway.
    ///
    /// Line 2 is circular with the Seongsu and Sinjeong spurs; line 6 has the
    /// one-way Eungam loop (Eungam, Yeokchon, Bulgwang, Dokbawi, Yeonsinnae,
    /// Gusan).
    pub fn seoul() -> Self {
        let mut table = Self::new();

        table.insert(
            line("2호선"),
            LineTopologyRule::Loop {
                spurs: vec![
                    SpurBranch {
                        label: line("2호선(성수지선)"),
                        stations: codes(&["211", "211-1", "211-2", "211-3", "211-4"]),
                    },
                    SpurBranch {
                        label: line("2호선(신정지선)"),
                        stations: codes(&["234", "234-1", "234-2", "234-3", "234-4"]),
                    },
                ],
            },
        );

        table.insert(
            line("6호선"),
            LineTopologyRule::PartialLoop {
                loop_section: codes(&["610", "611", "612", "613", "614", "615"]),
            },
        );

        table
    }
}

fn line(s: &str) -> LineId {
    // Built-in literals are non-empty
    LineId::new(s).expect("built-in line id is valid")
}

fn codes(list: &[&str]) -> BTreeSet<StationCode> {
    list.iter()
        .filter_map(|s| StationCode::parse(s).ok())
        .collect()
}
