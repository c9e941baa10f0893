//! Branch route enumeration.
//!
//! Every simple path from each start node is enumerated with an explicit
//! stack, so long lines never recurse. A path is complete when its tip could
//! not be extended: either the tip has no outgoing edges, or every neighbour
//! is already on the path.
//!
//! Start nodes are the stations with in-degree zero, in first-appearance
//! order. A group with none (a pure cycle) starts from its first station,
//! which is an arbitrary cut point; such routes carry `cycle_cut = true`.
//!
//! The number of routes is exponential in the number of junctions. Real
//! lines have few junctions, so this is not bounded.

use std::collections::HashSet;

use tracing::trace;

use crate::domain::{Direction, LineId, Route, StationCode};

use super::adjacency::Adjacency;

/// Raw enumeration result, before routes are numbered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    pub paths: Vec<Vec<StationCode>>,
    /// True if the group was a pure cycle and the start was arbitrary.
    pub cycle_cut: bool,
}

/// One DFS stack frame: how far through the tip's neighbour list we are,
/// and whether any neighbour was taken.
#[derive(Debug, Default)]
struct Frame {
    next: usize,
    extended: bool,
}

/// Start nodes for enumeration.
pub fn start_nodes(adjacency: &Adjacency) -> (Vec<&StationCode>, bool) {
    let in_degrees = adjacency.in_degrees();
    let starts: Vec<&StationCode> = adjacency
        .stations()
        .filter(|s| in_degrees.get(s).copied().unwrap_or(0) == 0)
        .collect();

    if starts.is_empty() {
        (adjacency.stations().take(1).collect(), true)
    } else {
        (starts, false)
    }
}

/// Enumerate all simple paths from every start node.
pub fn enumerate_paths(adjacency: &Adjacency) -> PathSet {
    let (starts, cycle_cut) = start_nodes(adjacency);
    let mut paths = Vec::new();

    for start in starts {
        walk_from(adjacency, start, &mut paths);
    }

    PathSet { paths, cycle_cut }
}

fn walk_from(adjacency: &Adjacency, start: &StationCode, out: &mut Vec<Vec<StationCode>>) {
    let mut path: Vec<StationCode> = vec![start.clone()];
    let mut on_path: HashSet<StationCode> = HashSet::from([start.clone()]);
    let mut stack: Vec<Frame> = vec![Frame::default()];

    while let Some(frame) = stack.last_mut() {
        let Some(tip) = path.last() else { break };
        let neighbors = adjacency.neighbors(tip);

        let mut step = None;
        while frame.next < neighbors.len() {
            let candidate = &neighbors[frame.next];
            frame.next += 1;
            if !on_path.contains(candidate) {
                step = Some(candidate.clone());
                break;
            }
        }

        match step {
            Some(next) => {
                frame.extended = true;
                on_path.insert(next.clone());
                path.push(next);
                stack.push(Frame::default());
            }
            None => {
                if !frame.extended {
                    trace!(start = %start, len = path.len(), "route complete");
                    out.push(path.clone());
                }
                stack.pop();
                if let Some(done) = path.pop() {
                    on_path.remove(&done);
                }
            }
        }
    }
}

/// Enumerate and number the routes of one `(line, direction)` group.
///
/// Branch numbers run from 1 in start-node order, then neighbour order.
pub fn enumerate_routes(line: &LineId, direction: Direction, adjacency: &Adjacency) -> Vec<Route> {
    let PathSet { paths, cycle_cut } = enumerate_paths(adjacency);

    paths
        .into_iter()
        .zip(1u32..)
        .filter_map(|(stations, branch_no)| {
            let start = stations.first()?.clone();
            Some(Route {
                line: line.clone(),
                direction,
                branch_no,
                start,
                stations,
                cycle_cut,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    fn adjacency(edges: &[(&str, &str)]) -> Adjacency {
        let mut adj = Adjacency::new();
        for (from, to) in edges {
            adj.push(code(from), code(to));
        }
        adj
    }

    fn as_strs(paths: &[Vec<StationCode>]) -> Vec<Vec<&str>> {
        paths
            .iter()
            .map(|p| p.iter().map(StationCode::as_str).collect())
            .collect()
    }

    #[test]
    fn straight_line() {
        let set = enumerate_paths(&adjacency(&[("A", "B"), ("B", "C")]));
        assert_eq!(as_strs(&set.paths), vec![vec!["A", "B", "C"]]);
        assert!(!set.cycle_cut);
    }

    #[test]
    fn fork_gives_one_route_per_branch() {
        let set = enumerate_paths(&adjacency(&[("A", "B"), ("B", "C"), ("B", "D")]));
        assert_eq!(
            as_strs(&set.paths),
            vec![vec!["A", "B", "C"], vec!["A", "B", "D"]]
        );
    }

    #[test]
    fn merge_gives_one_route_per_start() {
        let set = enumerate_paths(&adjacency(&[("C", "B"), ("D", "B"), ("B", "A")]));
        assert_eq!(
            as_strs(&set.paths),
            vec![vec!["C", "B", "A"], vec!["D", "B", "A"]]
        );
    }

    #[test]
    fn pure_cycle_is_cut_at_first_station() {
        let set = enumerate_paths(&adjacency(&[("A", "B"), ("B", "C"), ("C", "A")]));
        assert!(set.cycle_cut);
        assert_eq!(as_strs(&set.paths), vec![vec!["A", "B", "C"]]);
    }

    #[test]
    fn tail_into_loop_ends_when_loop_closes() {
        // A line running into a one-way loop: X -> L1 -> L2 -> L3 -> L1
        let set = enumerate_paths(&adjacency(&[
            ("X", "L1"),
            ("L1", "L2"),
            ("L2", "L3"),
            ("L3", "L1"),
        ]));
        assert!(!set.cycle_cut);
        assert_eq!(as_strs(&set.paths), vec![vec!["X", "L1", "L2", "L3"]]);
    }

    #[test]
    fn parallel_edges_duplicate_a_branch() {
        let set = enumerate_paths(&adjacency(&[("A", "B"), ("A", "B")]));
        assert_eq!(as_strs(&set.paths), vec![vec!["A", "B"], vec!["A", "B"]]);
    }

    #[test]
    fn empty_group_has_no_routes() {
        let set = enumerate_paths(&Adjacency::new());
        assert!(set.paths.is_empty());
    }

    #[test]
    fn routes_are_numbered_from_one() {
        let line = LineId::new("L2").unwrap();
        let adj = adjacency(&[("A", "B"), ("B", "C"), ("B", "D")]);

        let routes = enumerate_routes(&line, Direction::Down, &adj);
        let numbers: Vec<u32> = routes.iter().map(|r| r.branch_no).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert!(routes.iter().all(|r| r.start == code("A")));
        assert!(routes.iter().all(|r| r.direction == Direction::Down));
    }

    #[test]
    fn long_line_does_not_overflow() {
        let names: Vec<String> = (0..20_000).map(|i| format!("S{i}")).collect();
        let mut adj = Adjacency::new();
        for pair in names.windows(2) {
            adj.push(code(&pair[0]), code(&pair[1]));
        }

        let set = enumerate_paths(&adj);
        assert_eq!(set.paths.len(), 1);
        assert_eq!(set.paths[0].len(), 20_000);
    }
}
