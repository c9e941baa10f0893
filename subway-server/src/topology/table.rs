//! Enumerated routes for every adjacency group.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::domain::{Direction, LineId, Route, Segment};

use super::adjacency::{AdjacencyGroups, GroupKey};
use super::classify::classify_all;
use super::config::TopologyConfig;
use super::enumerate::enumerate_routes;
use super::path::ServicePattern;
use super::rules::RuleTable;

/// Routes grouped by `(line, direction)`.
///
/// Built once per run and treated as an immutable value afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    groups: BTreeMap<GroupKey, Vec<Route>>,
}

impl RouteTable {
    /// Enumerate every group. Groups are independent of each other.
    pub fn from_groups(groups: &AdjacencyGroups) -> Self {
        let groups = groups
            .iter()
            .map(|((line, direction), adjacency)| {
                let routes = enumerate_routes(line, *direction, adjacency);
                debug!(
                    line = %line,
                    direction = %direction,
                    stations = adjacency.len(),
                    routes = routes.len(),
                    "enumerated group"
                );
                ((line.clone(), *direction), routes)
            })
            .collect();

        Self { groups }
    }

    /// Run the whole pipeline: classify, group, enumerate.
    ///
    /// Only all-stations segments take part. Express skip segments run
    /// alongside the stopping track and would otherwise show up as extra
    /// branches; they are used for path search only.
    ///
    /// Logs lines whose specialized rule never matched, and lines that fell
    /// through to the default rule without a table entry.
    pub fn build(rules: &RuleTable, segments: &[Segment], config: &TopologyConfig) -> Self {
        let local: Vec<Segment> = segments
            .iter()
            .filter(|s| ServicePattern::Local.admits(s))
            .cloned()
            .collect();
        let classification = classify_all(rules, &local);

        for line in classification.report.unmatched_predicates(rules) {
            warn!(line = %line, "line has a topology rule but no segment matched its predicates");
        }
        for line in classification.report.unconfigured(rules) {
            debug!(line = %line, "no topology rule for line, using default");
        }

        let groups = AdjacencyGroups::build(&classification.edges, config);
        let table = Self::from_groups(&groups);

        info!(
            segments = local.len(),
            express_skipped = segments.len() - local.len(),
            edges = classification.edges.len(),
            groups = table.group_count(),
            routes = table.route_count(),
            "route table built"
        );

        table
    }

    /// Routes of one group, in branch order. Empty if the group does not exist.
    pub fn get(&self, line: &LineId, direction: Direction) -> &[Route] {
        self.groups
            .get(&(line.clone(), direction))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All routes for a line across its directions.
    pub fn for_line<'a>(&'a self, line: &'a LineId) -> impl Iterator<Item = &'a Route> + 'a {
        self.groups
            .iter()
            .filter(move |((l, _), _)| l == line)
            .flat_map(|(_, routes)| routes.iter())
    }

    /// Directions present for a line.
    pub fn directions(&self, line: &LineId) -> Vec<Direction> {
        self.groups
            .keys()
            .filter(|(l, _)| l == line)
            .map(|(_, d)| *d)
            .collect()
    }

    /// Distinct lines, in order.
    pub fn lines(&self) -> Vec<&LineId> {
        let mut lines: Vec<&LineId> = self.groups.keys().map(|(l, _)| l).collect();
        lines.dedup();
        lines
    }

    pub fn has_line(&self, line: &LineId) -> bool {
        self.groups.keys().any(|(l, _)| l == line)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[Route])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn route_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
