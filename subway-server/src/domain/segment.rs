//! Raw segments and the directed edges derived from them.

use super::{Direction, LineId, StationCode};

/// Error returned when constructing a malformed segment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSegment {
    /// Both ends name the same station
    #[error("segment on {line} joins station {station} to itself")]
    SelfLoop { line: LineId, station: StationCode },
}

/// A raw, undirected fact that two stations are adjacent on a line.
///
/// The order of `a` and `b` is the ingestion order; the classifier gives it
/// meaning (e.g. `a → b` is "down" on a default line).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    pub line: LineId,
    pub a: StationCode,
    pub b: StationCode,
    /// Served only by express trains.
    pub express: bool,
}

impl Segment {
    /// Create a local (non-express) segment.
    ///
    /// Rejects segments whose endpoints are the same station.
    pub fn new(line: LineId, a: StationCode, b: StationCode) -> Result<Self, InvalidSegment> {
        if a == b {
            return Err(InvalidSegment::SelfLoop { line, station: a });
        }
        Ok(Self {
            line,
            a,
            b,
            express: false,
        })
    }

    /// Mark the segment as express-only.
    pub fn express(mut self) -> Self {
        self.express = true;
        self
    }

    /// Check whether this segment touches a station.
    pub fn touches(&self, station: &StationCode) -> bool {
        &self.a == station || &self.b == station
    }
}

/// A direction-tagged, oriented adjacency derived from a [`Segment`].
///
/// `from != to` always holds, since segments reject self-loops.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectedEdge {
    pub line: LineId,
    pub direction: Direction,
    pub from: StationCode,
    pub to: StationCode,
}

impl DirectedEdge {
    pub(crate) fn new(
        line: LineId,
        direction: Direction,
        from: StationCode,
        to: StationCode,
    ) -> Self {
        debug_assert_ne!(from, to);
        Self {
            line,
            direction,
            from,
            to,
        }
    }
}
