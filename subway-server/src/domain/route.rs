//! Enumerated branch routes.

use serde::Serialize;

use super::{Direction, LineId, StationCode};

/// One complete traversal through a `(line, direction)` adjacency group.
///
/// Stations are distinct. `branch_no` starts at 1 and is contiguous within
/// the group, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub line: LineId,
    pub direction: Direction,
    pub branch_no: u32,
    /// The node enumeration started from.
    pub start: StationCode,
    pub stations: Vec<StationCode>,
    /// The group had no in-degree-zero station, so `start` is an arbitrary
    /// cut point in a cycle rather than a real terminus.
    pub cycle_cut: bool,
}

impl Route {
    /// Number of stations on the route.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Routes are never empty once enumerated, but a default-constructed
    /// collection might be.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Final station of the route.
    pub fn terminus(&self) -> Option<&StationCode> {
        self.stations.last()
    }

    /// Check whether the route calls at a station.
    pub fn calls_at(&self, station: &StationCode) -> bool {
        self.stations.contains(station)
    }
}
