//! Station code types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// An opaque, stable station code (the operator's "outer code").
///
/// Codes are compared exactly after surrounding whitespace is trimmed. Names
/// are never used as identifiers; see [`crate::stations::StationDirectory`]
/// for resolving a display name to its codes.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StationCode;
///
/// let seongsu = StationCode::parse("211").unwrap();
/// assert_eq!(seongsu.as_str(), "211");
///
/// // Branch stations carry a suffix
/// assert!(StationCode::parse("211-1").is_ok());
///
/// // Blank codes are rejected
/// assert!(StationCode::parse("  ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationCode {
                reason: "station code cannot be empty",
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(InvalidStationCode {
                reason: "station code cannot contain control characters",
            });
        }

        Ok(StationCode(trimmed.to_string()))
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationCode {
    type Error = InvalidStationCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StationCode::parse(&value)
    }
}

impl From<StationCode> for String {
    fn from(code: StationCode) -> Self {
        code.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the trimmed input
        #[test]
        fn roundtrip(s in "[0-9A-Z][0-9A-Z-]{0,8}") {
            let code = StationCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Whitespace-only strings are always rejected
        #[test]
        fn blank_rejected(s in "[ \t]{0,6}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }
    }
}
