//! Adjacency groups keyed by `(line, direction)`.

use std::collections::{BTreeMap, HashMap};

use crate::domain::{DirectedEdge, Direction, LineId, StationCode};

use super::config::TopologyConfig;

/// Key of an adjacency group.
pub type GroupKey = (LineId, Direction);

/// Station → reachable stations for one group.
///
/// Neighbour lists keep insertion order, and [`Adjacency::stations`] yields
/// stations in the order they first appeared (as either end of an edge).
/// Both orders feed branch numbering, so they must be deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    order: Vec<StationCode>,
    neighbors: HashMap<StationCode, Vec<StationCode>>,
}

impl Adjacency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `to` to the neighbour list of `from`.
    pub fn push(&mut self, from: StationCode, to: StationCode) {
        self.touch(&from);
        self.touch(&to);
        self.neighbors.entry(from).or_default().push(to);
    }

    /// Same as [`Adjacency::push`] but ignores an edge already present.
    pub fn push_unique(&mut self, from: StationCode, to: StationCode) {
        let exists = self
            .neighbors
            .get(&from)
            .is_some_and(|list| list.contains(&to));
        if !exists {
            self.push(from, to);
        }
    }

    fn touch(&mut self, station: &StationCode) {
        if !self.neighbors.contains_key(station) {
            self.neighbors.insert(station.clone(), Vec::new());
            self.order.push(station.clone());
        }
    }

    /// Stations directly reachable from `station`.
    pub fn neighbors(&self, station: &StationCode) -> &[StationCode] {
        self.neighbors
            .get(station)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All stations in first-appearance order.
    pub fn stations(&self) -> impl Iterator<Item = &StationCode> {
        self.order.iter()
    }

    pub fn contains(&self, station: &StationCode) -> bool {
        self.neighbors.contains_key(station)
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of directed edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(Vec::len).sum()
    }

    /// In-degree of every station.
    pub fn in_degrees(&self) -> HashMap<&StationCode, usize> {
        let mut degrees: HashMap<&StationCode, usize> =
            self.order.iter().map(|s| (s, 0)).collect();
        for targets in self.neighbors.values() {
            for to in targets {
                *degrees.entry(to).or_default() += 1;
            }
        }
        degrees
    }

    /// Out-degree of a station.
    pub fn out_degree(&self, station: &StationCode) -> usize {
        self.neighbors(station).len()
    }
}

/// All adjacency groups built from one batch of edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGroups {
    groups: BTreeMap<GroupKey, Adjacency>,
}

impl AdjacencyGroups {
    /// Group edges by `(line, direction)`, preserving edge order within each group.
    pub fn build<'a, I>(edges: I, config: &TopologyConfig) -> Self
    where
        I: IntoIterator<Item = &'a DirectedEdge>,
    {
        let mut groups: BTreeMap<GroupKey, Adjacency> = BTreeMap::new();

        for edge in edges {
            let adjacency = groups
                .entry((edge.line.clone(), edge.direction))
                .or_default();
            if config.dedup_parallel_edges {
                adjacency.push_unique(edge.from.clone(), edge.to.clone());
            } else {
                adjacency.push(edge.from.clone(), edge.to.clone());
            }
        }

        Self { groups }
    }

    pub fn get(&self, line: &LineId, direction: Direction) -> Option<&Adjacency> {
        self.groups.get(&(line.clone(), direction))
    }

    /// Groups ordered by `(line, direction)`.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &Adjacency)> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
