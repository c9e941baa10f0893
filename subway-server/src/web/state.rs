//! Application state for the web layer.

use std::sync::Arc;

use crate::dataset::Network;
use crate::domain::LineId;
use crate::failures::FailureLog;
use crate::topology::{RouteTable, RuleTable, ServicePattern, UndirectedGraph};

/// Shared application state.
///
/// Everything here is built once at startup and only read by handlers.
#[derive(Clone)]
pub struct AppState {
    /// Segments and station names
    pub network: Arc<Network>,

    /// Topology rules the routes were built with
    pub rules: Arc<RuleTable>,

    /// Enumerated routes per `(line, direction)`
    pub routes: Arc<RouteTable>,

    /// Where failed path searches are recorded
    pub failures: Arc<FailureLog>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: Network,
        rules: RuleTable,
        routes: RouteTable,
        failures: FailureLog,
    ) -> Self {
        Self {
            network: Arc::new(network),
            rules: Arc::new(rules),
            routes: Arc::new(routes),
            failures: Arc::new(failures),
        }
    }

    /// Line whose segments serve `requested`.
    ///
    /// Spur labels only exist in the route table; their segments belong to
    /// the host line.
    pub fn segment_line<'a>(&'a self, requested: &'a LineId) -> Option<&'a LineId> {
        if self.network.has_line(requested) {
            Some(requested)
        } else {
            self.rules.host_line(requested)
        }
    }

    /// Undirected graph of one line, restricted to a service pattern.
    pub fn line_graph(&self, line: &LineId, pattern: ServicePattern) -> UndirectedGraph {
        UndirectedGraph::from_segments(line, pattern, &self.network.segments)
    }
}
