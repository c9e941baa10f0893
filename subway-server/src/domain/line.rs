//! Line identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line identifier: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// A named rail line, e.g. `"2호선"` or a spur label such as `"2호선(성수지선)"`.
///
/// # Examples
///
/// ```
/// use subway_server::domain::LineId;
///
/// let line = LineId::new("2호선").unwrap();
/// assert_eq!(line.as_str(), "2호선");
///
/// assert!(LineId::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineId(String);

impl LineId {
    /// Create a line identifier, trimming surrounding whitespace.
    ///
    /// Returns an error if nothing is left after trimming.
    pub fn new(s: &str) -> Result<Self, InvalidLineId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidLineId {
                reason: "line identifier cannot be empty",
            });
        }
        Ok(LineId(trimmed.to_string()))
    }

    /// Returns the line identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LineId {
    type Error = InvalidLineId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        LineId::new(&value)
    }
}

impl From<LineId> for String {
    fn from(line: LineId) -> Self {
        line.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
