//! Route topology derived from raw segments.
//!
//! Raw segments flow through four stages:
//!
//! 1. [`classify_all`]: each segment becomes zero to two direction-tagged edges
//!    according to its line's [`LineTopologyRule`].
//! 2. [`AdjacencyGroups`]: edges are grouped by `(line, direction)`.
//! 3. [`enumerate_routes`]: every simple branch route through a group is
//!    listed and numbered.
//! 4. [`UndirectedGraph`]: independently, a line's segments can be searched
//!    both ways for a shortest hop-count path.

mod adjacency;
mod classify;
mod config;
mod enumerate;
mod path;
mod rules;
mod table;

#[cfg(test)]
mod scenario_tests;

pub use adjacency::{Adjacency, AdjacencyGroups, GroupKey};
pub use classify::{
    Classification, ClassifyReport, LineReport, RuleMatch, classify_all, classify_with,
};
pub use config::TopologyConfig;
pub use enumerate::{PathSet, enumerate_paths, enumerate_routes, start_nodes};
pub use path::{PathSearch, ServicePattern, UndirectedGraph};
pub use rules::{LineTopologyRule, RuleError, RuleTable, SpurBranch};
pub use table::RouteTable;
