//! Raw dataset DTOs.
//!
//! These types map directly to the line/node JSON export the network is
//! distributed as. Unknown fields are ignored.

use serde::Deserialize;

/// Top-level document: `{"DATA": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDataset {
    #[serde(rename = "DATA")]
    pub data: Vec<RawLine>,
}

/// One line and its adjacent-station pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLine {
    /// Line name as published (may need renaming).
    pub line: String,

    /// Adjacent station pairs.
    #[serde(default)]
    pub node: Vec<RawNode>,
}

/// A pair of adjacent stations. Well-formed nodes have exactly two entries.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    #[serde(default)]
    pub station: Vec<RawStation>,

    /// `"Y"` if the pair is only served by express trains.
    #[serde(default)]
    pub express_yn: Option<String>,
}

impl RawNode {
    pub fn is_express(&self) -> bool {
        self.express_yn
            .as_deref()
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("Y"))
    }
}

/// A station entry within a node.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStation {
    /// Display name.
    pub name: String,

    /// Outer code, used as the station identifier.
    pub fr_code: String,
}
