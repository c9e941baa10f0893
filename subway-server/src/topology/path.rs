//! Shortest hop-count paths over a line's undirected network.
//!
//! This ignores direction tagging entirely: every segment of the line is
//! usable both ways. Ties between equally short paths are broken by
//! neighbour order, which follows segment ingestion order.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::domain::{LineId, Segment, StationCode};

/// Which trains' segments a path query may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServicePattern {
    /// Segments served by all-stations trains.
    #[default]
    Local,
    /// Segments served only by express trains.
    Express,
}

impl ServicePattern {
    /// Check whether a segment is served under this pattern.
    pub fn admits(self, segment: &Segment) -> bool {
        match self {
            ServicePattern::Local => !segment.express,
            ServicePattern::Express => segment.express,
        }
    }
}

/// Undirected neighbour lists for one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    neighbors: HashMap<StationCode, Vec<StationCode>>,
}

/// Outcome of a path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSearch {
    /// Shortest path, starting at `start` and ending at `end`.
    Found(Vec<StationCode>),
    /// `start` or `end` is not on the line.
    EndpointMissing,
    /// Both endpoints exist but are not connected.
    Unreachable { visited: Vec<StationCode> },
}

impl PathSearch {
    /// The path, or an empty list when none was found.
    pub fn into_path(self) -> Vec<StationCode> {
        match self {
            PathSearch::Found(path) => path,
            PathSearch::EndpointMissing | PathSearch::Unreachable { .. } => Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathSearch::Found(_))
    }

    /// Short human-readable reason for a failed search.
    pub fn failure_reason(&self) -> Option<&'static str> {
        match self {
            PathSearch::Found(_) => None,
            PathSearch::EndpointMissing => Some("start or end station is not on the line"),
            PathSearch::Unreachable { .. } => Some("search exhausted without reaching end"),
        }
    }
}

impl UndirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph for `line` from the segments the pattern admits.
    pub fn from_segments<'a, I>(line: &LineId, pattern: ServicePattern, segments: I) -> Self
    where
        I: IntoIterator<Item = &'a Segment>,
    {
        let mut graph = Self::new();
        for segment in segments {
            if &segment.line == line && pattern.admits(segment) {
                graph.add_edge(segment.a.clone(), segment.b.clone());
            }
        }
        graph
    }

    /// Connect two stations in both directions, ignoring repeats.
    pub fn add_edge(&mut self, a: StationCode, b: StationCode) {
        let forward = self.neighbors.entry(a.clone()).or_default();
        if !forward.contains(&b) {
            forward.push(b.clone());
        }
        let backward = self.neighbors.entry(b).or_default();
        if !backward.contains(&a) {
            backward.push(a);
        }
    }

    pub fn neighbors(&self, station: &StationCode) -> &[StationCode] {
        self.neighbors
            .get(station)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, station: &StationCode) -> bool {
        self.neighbors.contains_key(station)
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Breadth-first search from `start` to `end`.
    pub fn search(&self, start: &StationCode, end: &StationCode) -> PathSearch {
        if !self.contains(start) || !self.contains(end) {
            debug!(start = %start, end = %end, "path endpoint not in graph");
            return PathSearch::EndpointMissing;
        }

        let mut visited: HashSet<&StationCode> = HashSet::from([start]);
        let mut parent: HashMap<&StationCode, &StationCode> = HashMap::new();
        let mut queue: VecDeque<&StationCode> = VecDeque::from([start]);
        // Discovery order, reported back on failure
        let mut seen: Vec<&StationCode> = vec![start];

        while let Some(current) = queue.pop_front() {
            trace!(station = %current, "BFS visiting");
            if current == end {
                break;
            }
            for neighbor in self.neighbors(current) {
                if visited.insert(neighbor) {
                    parent.insert(neighbor, current);
                    queue.push_back(neighbor);
                    seen.push(neighbor);
                }
            }
        }

        if !visited.contains(end) {
            debug!(start = %start, end = %end, visited = seen.len(), "no path found");
            return PathSearch::Unreachable {
                visited: seen.into_iter().cloned().collect(),
            };
        }

        let mut path = vec![end.clone()];
        let mut node = end;
        while let Some(prev) = parent.get(node) {
            path.push((*prev).clone());
            node = *prev;
        }
        path.reverse();

        debug!(start = %start, end = %end, hops = path.len() - 1, "path found");
        PathSearch::Found(path)
    }

    /// Shortest path from `start` to `end`, or empty if there is none.
    pub fn find_path(&self, start: &StationCode, end: &StationCode) -> Vec<StationCode> {
        self.search(start, end).into_path()
    }
}
