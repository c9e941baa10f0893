//! Topology build configuration.

/// Options controlling how adjacency groups are built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologyConfig {
    /// Collapse repeated `(from, to)` edges within a group.
    ///
    /// Off by default: a duplicated segment then yields a duplicated branch,
    /// matching how the raw data has always been enumerated.
    pub dedup_parallel_edges: bool,
}

impl TopologyConfig {
    pub fn new(dedup_parallel_edges: bool) -> Self {
        Self {
            dedup_parallel_edges,
        }
    }
}
