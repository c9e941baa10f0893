//! Traversal direction of a line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction: {0}")]
pub struct InvalidDirection(pub String);

/// Orientation qualifier for a line's directed edges.
///
/// Persisted numerically: `Up = 0`, `Down = 1`, `Single = 9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the line's origin (inner ring on a loop line).
    Up,
    /// Away from the line's origin (outer ring on a loop line).
    Down,
    /// Single-track spur branch with no paired direction.
    Single,
}

impl Direction {
    /// All directions, in persistence-code order.
    pub const ALL: [Direction; 3] = [Direction::Up, Direction::Down, Direction::Single];

    /// Numeric code used by downstream storage.
    pub fn code(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Single => 9,
        }
    }

    /// Inverse of [`Direction::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            9 => Some(Direction::Single),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Single => "single",
        }
    }
}

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "0" => Ok(Direction::Up),
            "down" | "1" => Ok(Direction::Down),
            "single" | "9" => Ok(Direction::Single),
            _ => Err(InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(Direction::Up.code(), 0);
        assert_eq!(Direction::Down.code(), 1);
        assert_eq!(Direction::Single.code(), 9);
    }

    #[test]
    fn from_code() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_code(dir.code()), Some(dir));
        }
        assert_eq!(Direction::from_code(2), None);
    }

    #[test]
    fn parse_names_and_codes() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("DOWN".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!(" single ".parse::<Direction>().unwrap(), Direction::Single);
        assert_eq!("9".parse::<Direction>().unwrap(), Direction::Single);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"up\"");
        let d: Direction = serde_json::from_str("\"single\"").unwrap();
        assert_eq!(d, Direction::Single);
    }
}
