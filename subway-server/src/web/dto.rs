//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Direction, LineId, Route, StationCode};
use crate::stations::StationDirectory;
use crate::topology::RouteTable;

/// Query for a line's routes.
#[derive(Debug, Deserialize)]
pub struct RoutesQuery {
    /// Direction name (`up`, `down`, `single`) or code (`0`, `1`, `9`)
    pub direction: Option<String>,
}

/// Query for a path between two stations.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub line: String,

    /// Station code or name
    pub from: String,

    /// Station code or name
    pub to: String,

    /// Restrict the search to express segments
    pub express: Option<bool>,
}

/// A station with its display name.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StationView {
    pub code: String,
    pub name: String,
}

impl StationView {
    pub fn new(code: &StationCode, directory: &StationDirectory) -> Self {
        Self {
            code: code.to_string(),
            name: directory.display(code),
        }
    }
}

/// Route count for one direction of a line.
#[derive(Debug, Serialize)]
pub struct GroupSummary {
    pub direction: Direction,
    pub direction_code: u8,
    pub routes: usize,
}

/// A line and its route groups.
#[derive(Debug, Serialize)]
pub struct LineSummary {
    pub line: String,
    pub groups: Vec<GroupSummary>,
}

#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineSummary>,
}

impl LinesResponse {
    pub fn from_table(table: &RouteTable) -> Self {
        let lines = table
            .lines()
            .into_iter()
            .map(|line| LineSummary {
                line: line.to_string(),
                groups: table
                    .directions(line)
                    .into_iter()
                    .map(|direction| GroupSummary {
                        direction,
                        direction_code: direction.code(),
                        routes: table.get(line, direction).len(),
                    })
                    .collect(),
            })
            .collect();

        Self { lines }
    }
}

/// One enumerated route.
#[derive(Debug, Serialize)]
pub struct RouteView {
    pub line: String,
    pub direction: Direction,
    pub direction_code: u8,
    pub branch_no: u32,
    pub start: StationView,
    pub cycle_cut: bool,
    pub stations: Vec<StationView>,
}

impl RouteView {
    pub fn from_route(route: &Route, directory: &StationDirectory) -> Self {
        Self {
            line: route.line.to_string(),
            direction: route.direction,
            direction_code: route.direction.code(),
            branch_no: route.branch_no,
            start: StationView::new(&route.start, directory),
            cycle_cut: route.cycle_cut,
            stations: route
                .stations
                .iter()
                .map(|s| StationView::new(s, directory))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub line: String,
    pub routes: Vec<RouteView>,
}

impl RoutesResponse {
    pub fn new<'a>(
        line: &LineId,
        routes: impl IntoIterator<Item = &'a Route>,
        directory: &StationDirectory,
    ) -> Self {
        Self {
            line: line.to_string(),
            routes: routes
                .into_iter()
                .map(|r| RouteView::from_route(r, directory))
                .collect(),
        }
    }
}

/// Shortest path between two stations. `stations` is empty when not found.
#[derive(Debug, Serialize)]
pub struct PathResponse {
    pub line: String,
    pub found: bool,
    pub stations: Vec<StationView>,
}

impl PathResponse {
    pub fn new(line: &LineId, path: &[StationCode], directory: &StationDirectory) -> Self {
        Self {
            line: line.to_string(),
            found: !path.is_empty(),
            stations: path
                .iter()
                .map(|s| StationView::new(s, directory))
                .collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
